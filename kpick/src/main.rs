use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use log::{debug, info};

use kubepick::kubectl::DEFAULT_EXECUTABLE;
use kubepick::{default_config_path, FilterMode, KubeConfig, Kubectl, TerminalSelector};

/// Pick a kubectl context, and optionally a namespace for it.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Kube config to read contexts from [default: ~/.kube/config]
    #[clap(long, value_name = "PATH")]
    kubeconfig: Option<PathBuf>,

    /// kubectl binary, looked up on PATH unless it contains a slash
    #[clap(long, value_name = "PATH", default_value = DEFAULT_EXECUTABLE)]
    kubectl: String,

    /// Narrow the context and namespace lists by typing
    #[clap(long)]
    filter: bool,

    /// More logging, repeat for more (-v info, -vv debug, -vvv trace)
    #[clap(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level(args.verbose)),
    )
    .init();
    debug!("{args:?}");

    let kubectl = Kubectl::locate(&args.kubectl).context("Looking up kubectl")?;

    let config_path = match args.kubeconfig {
        Some(path) => path,
        None => default_config_path().context("Locating kube config")?,
    };
    let kube_config = KubeConfig::read_from(&config_path).context("Loading contexts")?;
    debug!("Current context is {}", kube_config.current_context);

    let filter = if args.filter {
        FilterMode::Substring
    } else {
        FilterMode::None
    };

    let outcome = kubepick::run(&kube_config, &kubectl, &TerminalSelector::default(), filter)
        .context("Switching context")?;

    match outcome.namespace {
        Some(ns) => info!("Now using {} in {}", ns, outcome.context),
        None => info!("Now using {}", outcome.context),
    }

    Ok(())
}
