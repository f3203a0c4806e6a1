// src/pipeline/mod.rs
// =============================================================================
// This module turns keystrokes into at most one live query and renders the
// newest answer.
//
// Submodules:
// - input: Debouncing and the stdin event source
// - runner: The switch-to-latest loop (SearchPipeline)
// =============================================================================

mod input;
mod runner;

pub use input::{stdin_events, DEFAULT_DEBOUNCE};
pub use runner::{PipelineStats, SearchPipeline};
