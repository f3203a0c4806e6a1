// src/render/view.rs
// =============================================================================
// Where rendered results end up.
//
// The pipeline only needs something it can hand a list of items to after
// every resolved query. That is the ResultsView trait. Implementations:
// - ResultsContainer: the in-memory list of cards, rebuilt in place
// - HtmlPage: a page with the search field and results container,
//   rewritten to disk after every render
// - TerminalView: a human-readable table on stdout
// - JsonView: the items as JSON on stdout
// =============================================================================

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::cards::{self, CardOptions};
use super::dom::ResultsContainer;
use super::template;
use crate::search::Item;

/// A render target for search results.
pub trait ResultsView {
    /// Replaces whatever is displayed with `items` (possibly empty).
    fn show(&mut self, items: &[Item]) -> Result<()>;

    /// Called with every debounced value of the search field.
    fn input_changed(&mut self, _value: &str) {}
}

impl ResultsView for ResultsContainer {
    fn show(&mut self, items: &[Item]) -> Result<()> {
        cards::render(self, items, &CardOptions::default());
        Ok(())
    }
}

/// An HTML page holding the search field and the results container.
#[derive(Debug)]
pub struct HtmlPage {
    path: PathBuf,
    results: ResultsContainer,
    options: CardOptions,
    search_value: String,
}

impl HtmlPage {
    pub fn new(path: impl Into<PathBuf>, options: CardOptions) -> Self {
        Self {
            path: path.into(),
            results: ResultsContainer::default(),
            options,
            search_value: String::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn to_html(&self) -> Result<String> {
        template::render_page(&self.search_value, &self.results)
    }

    // Writes the page (creates the file on first render)
    pub fn write(&self) -> Result<()> {
        let html = self.to_html()?;
        std::fs::write(&self.path, html)
            .with_context(|| format!("Failed to write page to {}", self.path.display()))
    }
}

impl ResultsView for HtmlPage {
    // Mirrors the field value into the page's search input
    fn input_changed(&mut self, value: &str) {
        self.search_value = value.to_string();
    }

    fn show(&mut self, items: &[Item]) -> Result<()> {
        cards::render(&mut self.results, items, &self.options);
        self.write()?;
        log::info!(
            "[VIEW] Rendered {} card(s) to {}",
            self.results.children().len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Prints results as a table, like a very plain set of cards.
#[derive(Debug, Default)]
pub struct TerminalView {
    options: CardOptions,
}

impl TerminalView {
    pub fn new(options: CardOptions) -> Self {
        Self { options }
    }

    // Lays out the same cards the page would show, as plain text
    fn format(&self, items: &[Item]) -> String {
        let mut out = String::new();

        if items.is_empty() {
            out.push_str("No results\n");
            return out;
        }

        out.push_str(&format!("{:<20} {:<50}\n", "NAME", "URL"));
        out.push_str(&format!("{}\n", "=".repeat(71)));

        for item in items {
            let card = cards::card(item, &self.options);

            out.push_str(&format!("{:<20} {:<50}\n", card.title, card.href));
            if !card.description.is_empty() {
                out.push_str(&format!("    {}\n", card.description));
            }
        }

        out
    }

    // format() already ends every line, so this adds no newline of its own
    fn print_to(&self, out: &mut impl Write, items: &[Item]) -> Result<()> {
        write!(out, "{}", self.format(items))?;
        out.flush()?;
        Ok(())
    }
}

impl ResultsView for TerminalView {
    fn show(&mut self, items: &[Item]) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        self.print_to(&mut stdout, items)
    }
}

/// Prints each result list as a pretty JSON array.
#[derive(Debug, Default)]
pub struct JsonView;

impl ResultsView for JsonView {
    fn show(&mut self, items: &[Item]) -> Result<()> {
        let json = serde_json::to_string_pretty(items)?;
        println!("{}", json);
        Ok(())
    }
}
