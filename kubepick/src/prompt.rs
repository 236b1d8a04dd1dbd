//! Single-choice menus.

use std::io;
use std::ops::Range;

use console::{style, Key, Term};
use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;

use crate::error::{Error, Result};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Show every option, pick with the arrow keys.
    None,
    /// Typing narrows the options to those containing the typed text.
    Substring,
}

/// What to show for one prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionList {
    pub prompt: String,
    pub items: Vec<String>,
    pub page_size: usize,
    pub filter: FilterMode,
    /// Index the cursor starts on.
    pub default: usize,
}

impl SelectionList {
    pub fn new(prompt: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            prompt: prompt.into(),
            items,
            page_size: DEFAULT_PAGE_SIZE,
            filter: FilterMode::None,
            default: 0,
        }
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn filter(mut self, filter: FilterMode) -> Self {
        self.filter = filter;
        self
    }

    pub fn start_at(mut self, default: usize) -> Self {
        self.default = default;
        self
    }
}

pub trait Selector {
    /// Block until the user picks one of `list.items`, returning it.
    fn select(&self, list: &SelectionList) -> Result<String>;
}

/// Prompts on the controlling terminal.
pub struct TerminalSelector {
    term: Term,
}

impl Default for TerminalSelector {
    fn default() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Selector for TerminalSelector {
    fn select(&self, list: &SelectionList) -> Result<String> {
        if list.items.is_empty() {
            return Err(Error::NothingToSelect {
                prompt: list.prompt.clone(),
            });
        }

        let picked = match list.filter {
            FilterMode::None => self.plain(list),
            FilterMode::Substring => SubstringSelect::new(list, &self.term).interact(),
        };

        match picked {
            Ok(Some(index)) => {
                debug!("{}: picked {}", list.prompt, list.items[index]);
                Ok(list.items[index].clone())
            }
            Ok(None) => Err(Error::SelectionCancelled {
                prompt: list.prompt.clone(),
            }),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                // ctrl-c can leave the cursor hidden
                let _ = self.term.show_cursor();
                Err(Error::SelectionCancelled {
                    prompt: list.prompt.clone(),
                })
            }
            Err(e) => Err(Error::Prompt(e)),
        }
    }
}

impl TerminalSelector {
    fn plain(&self, list: &SelectionList) -> io::Result<Option<usize>> {
        let theme = ColorfulTheme::default();
        let mut select = Select::with_theme(&theme);
        select
            .with_prompt(list.prompt.as_str())
            .items(&list.items)
            .default(list.default.min(list.items.len() - 1))
            .max_length(list.page_size.max(1));
        select.interact_on_opt(&self.term)
    }
}

// region: Substring filtering
/// Indices of the items containing `query`. Case-sensitive.
pub fn filter_matches(items: &[String], query: &str) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.contains(query))
        .map(|(index, _)| index)
        .collect()
}

/// The page of `len` entries holding `cursor`.
pub fn page_window(len: usize, cursor: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = (cursor / page_size) * page_size;
    start.min(len)..(start + page_size).min(len)
}

/// What a key press did to the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// Index into the full item list.
    Pick(usize),
    Cancel,
}

/// Typed text plus the cursor position within the current matches.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Search {
    pub query: String,
    pub cursor: usize,
}

impl Search {
    /// Apply `key`, given `matches` for the current query.
    pub fn handle(&mut self, key: Key, matches: &[usize]) -> Step {
        match key {
            Key::Enter => {
                if let Some(&index) = matches.get(self.cursor) {
                    return Step::Pick(index);
                }
            }
            Key::Escape => return Step::Cancel,
            Key::ArrowUp if !matches.is_empty() => {
                self.cursor = self.cursor.checked_sub(1).unwrap_or(matches.len() - 1);
            }
            Key::ArrowDown if !matches.is_empty() => {
                self.cursor = (self.cursor + 1) % matches.len();
            }
            Key::Backspace => {
                self.query.pop();
                self.cursor = 0;
            }
            Key::Char(c) if !c.is_control() => {
                self.query.push(c);
                self.cursor = 0;
            }
            _ => {}
        }
        Step::Continue
    }
}

/// Menu that starts with an empty search line and narrows as the user types.
struct SubstringSelect<'a> {
    list: &'a SelectionList,
    term: &'a Term,
    search: Search,
    drawn: usize,
}

impl<'a> SubstringSelect<'a> {
    fn new(list: &'a SelectionList, term: &'a Term) -> Self {
        Self {
            list,
            term,
            search: Search::default(),
            drawn: 0,
        }
    }

    fn interact(mut self) -> io::Result<Option<usize>> {
        self.term.hide_cursor()?;
        let picked = self.run();
        self.clear()?;
        self.term.show_cursor()?;
        picked
    }

    fn run(&mut self) -> io::Result<Option<usize>> {
        loop {
            let matches = filter_matches(&self.list.items, &self.search.query);
            self.search.cursor = self.search.cursor.min(matches.len().saturating_sub(1));
            self.render(&matches)?;

            match self.search.handle(self.term.read_key()?, &matches) {
                Step::Continue => {}
                Step::Pick(index) => return Ok(Some(index)),
                Step::Cancel => return Ok(None),
            }
        }
    }

    fn render(&mut self, matches: &[usize]) -> io::Result<()> {
        self.clear()?;

        self.term.write_line(&format!(
            "{} {} {}",
            style("?").yellow(),
            style(&self.list.prompt).bold(),
            self.search.query
        ))?;
        self.drawn = 1;

        if matches.is_empty() {
            self.term.write_line(&format!("  {}", style("no matches").dim()))?;
            self.drawn += 1;
            return Ok(());
        }

        for pos in page_window(matches.len(), self.search.cursor, self.list.page_size) {
            let item = &self.list.items[matches[pos]];
            if pos == self.search.cursor {
                self.term
                    .write_line(&format!("{} {}", style("❯").green(), style(item).cyan()))?;
            } else {
                self.term.write_line(&format!("  {item}"))?;
            }
            self.drawn += 1;
        }
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.drawn > 0 {
            self.term.clear_last_lines(self.drawn)?;
            self.drawn = 0;
        }
        Ok(())
    }
}
// endregion
