// src/search/mod.rs
// =============================================================================
// This module talks to the repository search API.
//
// Submodules:
// - term: Turns a raw input value into a search term and a query URL
// - types: The JSON envelope returned by the endpoint
// - error: The single failure kind of a query
// - client: The HTTP backend and the failure-swallowing query function
//
// Rust concepts:
// - Traits: RepoSearch is the seam between the pipeline and the network
// - pub use: Re-export items so callers write `search::query()`
// =============================================================================

mod client;
mod error;
mod term;
mod types;

pub use client::{query, GithubSearch, RepoSearch, DEFAULT_ENDPOINT};
pub use error::QueryFailure;
pub use term::SearchTerm;
pub use types::{Item, Owner, QueryResult};
