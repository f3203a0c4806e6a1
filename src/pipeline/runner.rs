// src/pipeline/runner.rs
// =============================================================================
// This module wires the three stages together:
//
//   input events -> debounce -> drop empty terms -> query -> render
//
// Only one query is ever "live". Every search term that makes it through
// the filter:
// 1. Aborts the task running the previous query, if it is still pending
// 2. Bumps the query token
// 3. Spawns a task for the new query, tagged with that token
//
// A finished query reports back over a channel as (token, outcome). The
// outcome is rendered only if its token is still the latest one. Aborting
// alone is not enough: a task can finish and send its outcome just before
// it is aborted, and the token check throws that stale outcome away.
//
// Rust concepts:
// - tokio::select!: Waits on several futures at once, runs the first ready
//   (biased, so branches are checked top to bottom)
// - tokio::spawn + JoinHandle::abort: Cancellable background work
// - Arc: Shares the backend between the pipeline and its query tasks
// =============================================================================

use futures::stream::{Stream, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::input::debounce;
use crate::render::ResultsView;
use crate::search::{self, QueryResult, RepoSearch, SearchTerm};

/// Identifies the most recently started query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueryToken(u64);

impl QueryToken {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// What happened during one run of the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Queries started (one per non-empty debounced value)
    pub queries_started: usize,
    /// Queries aborted because newer input arrived first
    pub superseded: usize,
    /// Outcomes that arrived after their query was superseded
    pub stale_discarded: usize,
    /// Times the view was redrawn
    pub renders: usize,
}

type Outcome = (QueryToken, Option<QueryResult>);

pub struct SearchPipeline<B, V> {
    backend: Arc<B>,
    view: V,
    debounce: Duration,
}

impl<B, V> SearchPipeline<B, V>
where
    B: RepoSearch + 'static,
    V: ResultsView,
{
    pub fn new(backend: B, view: V, debounce: Duration) -> Self {
        Self {
            backend: Arc::new(backend),
            view,
            debounce,
        }
    }

    pub fn into_view(self) -> V {
        self.view
    }

    // Runs until the input ends and the last live query has been rendered
    pub async fn run<S>(&mut self, input: S) -> PipelineStats
    where
        S: Stream<Item = String>,
    {
        let debounced = debounce(input, self.debounce);
        futures::pin_mut!(debounced);

        let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();
        let mut latest = QueryToken::default();
        let mut in_flight: Option<JoinHandle<()>> = None;
        let mut input_open = true;
        let mut stats = PipelineStats::default();

        while input_open || in_flight.is_some() {
            tokio::select! {
                // Input first: a newer term always lands before an outcome
                // that shows up in the same wakeup, so that outcome is stale
                biased;

                value = debounced.next(), if input_open => {
                    let Some(value) = value else {
                        log::debug!("[PIPELINE] Input closed");
                        input_open = false;
                        continue;
                    };

                    self.view.input_changed(&value);

                    let Some(term) = SearchTerm::parse(&value) else {
                        log::debug!("[PIPELINE] Ignoring empty search value");
                        continue;
                    };

                    if let Some(previous) = in_flight.take() {
                        if !previous.is_finished() {
                            log::debug!("[PIPELINE] Superseding query #{}", latest.0);
                            stats.superseded += 1;
                        }
                        previous.abort();
                    }

                    latest = latest.next();
                    stats.queries_started += 1;
                    log::info!("[PIPELINE] Query #{} for '{}'", latest.0, term);
                    in_flight = Some(self.spawn_query(latest, term, tx.clone()));
                }
                Some((token, outcome)) = rx.recv() => {
                    if token != latest {
                        log::debug!("[PIPELINE] Discarding stale result of query #{}", token.0);
                        stats.stale_discarded += 1;
                        continue;
                    }

                    in_flight = None;
                    let items = outcome.map(|result| result.items).unwrap_or_default();

                    if let Err(e) = self.view.show(&items) {
                        log::error!("[PIPELINE] Failed to render results: {:#}", e);
                    }
                    stats.renders += 1;
                }
            }
        }

        log::info!(
            "[PIPELINE] Done: {} queries, {} superseded, {} stale, {} renders",
            stats.queries_started,
            stats.superseded,
            stats.stale_discarded,
            stats.renders
        );
        stats
    }

    fn spawn_query(
        &self,
        token: QueryToken,
        term: SearchTerm,
        tx: mpsc::UnboundedSender<Outcome>,
    ) -> JoinHandle<()> {
        let backend = Arc::clone(&self.backend);

        tokio::spawn(async move {
            let outcome = search::query(backend.as_ref(), &term).await;
            // The receiver only goes away when the pipeline itself is dropped
            let _ = tx.send((token, outcome));
        })
    }
}
