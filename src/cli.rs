// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - watch: Reads the search field from stdin (one line per edit) and keeps
//   the results up to date as you type
// - query: Runs a single search and prints the results once
// =============================================================================

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::pipeline::DEFAULT_DEBOUNCE;
use crate::search::DEFAULT_ENDPOINT;

#[derive(Parser, Debug)]
#[command(
    name = "repo-search",
    version,
    about = "Search GitHub repositories as you type",
    long_about = "repo-search debounces what you type, searches GitHub repositories sorted by stars, \
                  and renders the newest results as cards in an HTML page or in the terminal."
)]
pub struct Cli {
    /// Repository search endpoint
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Log progress (same as RUST_LOG=info)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search as you type: every stdin line is the new value of the search field
    ///
    /// Example: repo-search watch --html results.html
    Watch {
        /// Quiet period before a value is searched, in milliseconds
        #[arg(long, default_value_t = DEFAULT_DEBOUNCE.as_millis() as u64)]
        debounce_ms: u64,

        /// Rewrite this HTML page after every search instead of printing
        #[arg(long, conflicts_with = "json")]
        html: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Run one search and print the results
    ///
    /// Example: repo-search query rust lang
    Query {
        /// Search words (joined like the search field would be)
        #[arg(required = true)]
        terms: Vec<String>,

        #[command(flatten)]
        render: RenderArgs,
    },
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output results as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Cut descriptions longer than this many characters
    #[arg(long, default_value_t = 200)]
    pub description_limit: usize,

    /// Cut repository names longer than this many characters (0 = never)
    #[arg(long, default_value_t = 15)]
    pub title_limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_defaults() {
        let cli = Cli::parse_from(["repo-search", "watch"]);
        assert_eq!(cli.endpoint, DEFAULT_ENDPOINT);
        match cli.command {
            Commands::Watch { debounce_ms, html, render } => {
                assert_eq!(debounce_ms, 500);
                assert!(html.is_none());
                assert_eq!(render.description_limit, 200);
                assert_eq!(render.title_limit, 15);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_query_collects_terms() {
        let cli = Cli::parse_from(["repo-search", "query", "rust", "lang", "--json"]);
        match cli.command {
            Commands::Query { terms, render } => {
                assert_eq!(terms, vec!["rust", "lang"]);
                assert!(render.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_html_conflicts_with_json() {
        let result = Cli::try_parse_from(["repo-search", "watch", "--html", "out.html", "--json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_query_requires_terms() {
        assert!(Cli::try_parse_from(["repo-search", "query"]).is_err());
    }
}
