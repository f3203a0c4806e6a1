// src/search/client.rs
// =============================================================================
// This module performs the actual search request.
//
// Strategy:
// - RepoSearch is the seam: the pipeline only knows "give me results for
//   this term", so tests can plug in a scripted backend
// - GithubSearch is the real backend, one reqwest Client reused for every
//   request (connection pooling)
// - query() is the boundary where failures stop: it logs the failure and
//   returns None instead of an error
//
// No timeout and no retry: a slow request stays pending until it
// resolves, fails, or is superseded by newer input.
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use url::Url;

use super::error::QueryFailure;
use super::term::{build_query_url, SearchTerm};
use super::types::QueryResult;

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/search/repositories";

// The API refuses requests without a User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Anything that can answer a repository search.
#[async_trait]
pub trait RepoSearch: Send + Sync {
    async fn fetch(&self, term: &SearchTerm) -> Result<QueryResult, QueryFailure>;
}

/// Searches the GitHub repository endpoint (or anything speaking its format).
#[derive(Debug, Clone)]
pub struct GithubSearch {
    client: Client,
    endpoint: Url,
}

impl GithubSearch {
    // Creates a backend for the given endpoint
    //
    // Fails only on an unparseable endpoint or if the TLS backend cannot
    // be initialised.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid search endpoint '{}'", endpoint))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RepoSearch for GithubSearch {
    async fn fetch(&self, term: &SearchTerm) -> Result<QueryResult, QueryFailure> {
        let url = build_query_url(&self.endpoint, term);
        log::debug!("[QUERY] GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryFailure::Status(status));
        }

        // Read the body as text first so a parse failure is reported as
        // QueryFailure::Parse rather than a transport error
        let body = response.text().await?;
        let result: QueryResult = serde_json::from_str(&body)?;
        Ok(result)
    }
}

/// Runs one search, mapping any failure to `None`.
///
/// Callers treat `None` as "nothing to show", never as a fault.
pub async fn query<B>(backend: &B, term: &SearchTerm) -> Option<QueryResult>
where
    B: RepoSearch + ?Sized,
{
    match backend.fetch(term).await {
        Ok(result) => {
            log::info!(
                "[QUERY] '{}' -> {} item(s) of {} total",
                term,
                result.items.len(),
                result.total_count
            );
            Some(result)
        }
        Err(failure) => {
            log::warn!("[QUERY] An error occurred while searching for '{}': {}", term, failure);
            None
        }
    }
}
