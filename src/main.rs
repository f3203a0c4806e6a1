// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so results on stdout stay clean)
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 2 = error)
//    A failed search is not an error: it shows as an empty result list
//
// Rust concepts used:
// - async/await: The pipeline waits on timers and network requests
// - Generics: One watch loop for every kind of results view
// - match: Pattern matching to handle different subcommands
// =============================================================================

mod cli;
mod pipeline;
mod render;
mod search;

use anyhow::Result;
use clap::Parser;
use std::time::Duration;

use cli::{Cli, Commands, RenderArgs};
use pipeline::{PipelineStats, SearchPipeline};
use render::{CardOptions, HtmlPage, JsonView, ResultsView, TerminalView};
use search::{GithubSearch, SearchTerm};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG always wins; otherwise warnings only, or info with --verbose
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    let backend = GithubSearch::new(&cli.endpoint)?;
    log::info!("[MAIN] Searching {}", backend.endpoint());

    match cli.command {
        Commands::Watch {
            debounce_ms,
            html,
            render,
        } => {
            let debounce = Duration::from_millis(debounce_ms);
            let options = card_options(&render);

            match (html, render.json) {
                (Some(path), _) => {
                    let page = HtmlPage::new(path, options);
                    // Write the empty page up front so it can be opened right away
                    page.write()?;
                    eprintln!("Rendering results to {}", page.path().display());
                    let page = watch(backend, page, debounce).await;
                    eprintln!("Final results left in {}", page.path().display());
                }
                (None, true) => {
                    watch(backend, JsonView, debounce).await;
                }
                (None, false) => {
                    watch(backend, TerminalView::new(options), debounce).await;
                }
            }
            Ok(0)
        }
        Commands::Query { terms, render } => handle_query(&backend, &terms, &render).await,
    }
}

// Runs the search-as-you-type pipeline over stdin until it is closed
//
// Hands the view back so the caller can report where results ended up.
async fn watch<V: ResultsView>(backend: GithubSearch, view: V, debounce: Duration) -> V {
    eprintln!("Type to search (one line per edit, Ctrl-D to quit)");

    let mut runner = SearchPipeline::new(backend, view, debounce);
    let stats = runner.run(pipeline::stdin_events()).await;
    print_summary(&stats);

    runner.into_view()
}

// Summary goes to stderr so --json output stays parseable
fn print_summary(stats: &PipelineStats) {
    eprintln!();
    eprintln!("📊 Summary:");
    eprintln!("   🔎 Queries: {}", stats.queries_started);
    eprintln!("   ⏭️  Superseded: {}", stats.superseded + stats.stale_discarded);
    eprintln!("   🖼️  Renders: {}", stats.renders);
}

// Handles the 'query' subcommand: one search, one render
async fn handle_query(backend: &GithubSearch, terms: &[String], render: &RenderArgs) -> Result<i32> {
    let Some(term) = SearchTerm::parse(&terms.join(" ")) else {
        eprintln!("Nothing to search for");
        return Ok(0);
    };

    // A failed search was already logged by query(); it renders as no results
    let outcome = search::query(backend, &term).await;
    let items = outcome.map(|result| result.items).unwrap_or_default();

    if render.json {
        JsonView.show(&items)?;
    } else {
        TerminalView::new(card_options(render)).show(&items)?;
    }

    Ok(0)
}

fn card_options(render: &RenderArgs) -> CardOptions {
    CardOptions {
        description_limit: render.description_limit,
        title_limit: (render.title_limit > 0).then_some(render.title_limit),
    }
}
