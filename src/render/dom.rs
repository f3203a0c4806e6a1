// src/render/dom.rs
// =============================================================================
// The in-memory side of the results: one Card per rendered result, held by
// the results container.
//
// A Card is the data of one result block (link, heading, image,
// paragraph) after truncation. Turning cards into markup is the job of the
// templates in `template.rs`; nothing here writes HTML by hand.
// =============================================================================

use anyhow::Result;
use serde::Serialize;

use super::template;

/// One result block, ready to be laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Link target, opened in a new tab
    pub href: String,
    /// Heading text (possibly truncated)
    pub title: String,
    /// The untruncated name, shown as the heading's tooltip
    pub full_title: String,
    pub avatar_url: String,
    /// Paragraph text (possibly truncated, empty when there is none)
    pub description: String,
}

/// The container the result cards are rendered into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsContainer {
    id: String,
    children: Vec<Card>,
}

impl ResultsContainer {
    pub const DEFAULT_ID: &'static str = "results";

    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append_child(&mut self, child: Card) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Card] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The container as a `<div>` holding one block per card.
    pub fn to_html(&self) -> Result<String> {
        template::render_results(self)
    }
}

impl Default for ResultsContainer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ID)
    }
}
