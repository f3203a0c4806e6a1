// src/render/mod.rs
// =============================================================================
// This module renders search results.
//
// Submodules:
// - dom: Cards and the results container that holds them
// - cards: Builds one card per result, with truncation cosmetics
// - template: minijinja templates for the page and the results markup
// - view: Render targets the pipeline can write into
// =============================================================================

mod cards;
mod dom;
mod template;
mod view;

pub use cards::CardOptions;
pub use dom::ResultsContainer;
pub use view::{HtmlPage, JsonView, ResultsView, TerminalView};
