// src/search/term.rs
// =============================================================================
// This module turns the text of the search field into a query.
//
// How it works:
// 1. Split the raw value on runs of whitespace and commas
// 2. Drop the empty pieces (leading/trailing separators)
// 3. If nothing is left, there is no search term at all
// 4. Otherwise percent-encode each word and join them with '+'
//
// Example:
//   "rust lang"   -> q=rust+lang
//   "tokio, axum" -> q=tokio+axum
//   "   "         -> no query
// =============================================================================

use std::fmt;
use url::{form_urlencoded, Url};

// Fixed ordering: most starred first
const SORT: &str = "stars";
const ORDER: &str = "desc";

/// A non-empty search string, stored as its separate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    words: Vec<String>,
}

impl SearchTerm {
    /// Parses the current value of the search field.
    ///
    /// Returns None for empty values and values made only of
    /// whitespace and commas - those must never reach the network.
    pub fn parse(raw: &str) -> Option<Self> {
        let words: Vec<String> = raw
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();

        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The value of the `q` query parameter.
    ///
    /// Each word is form-encoded on its own so a literal '+' inside a
    /// word (e.g. "c++") does not turn into a separator.
    pub fn as_query_param(&self) -> String {
        self.words
            .iter()
            .map(|word| form_urlencoded::byte_serialize(word.as_bytes()).collect::<String>())
            .collect::<Vec<_>>()
            .join("+")
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

// Builds the request URL for a term
//
// Any query string already present on the endpoint is replaced.
pub fn build_query_url(endpoint: &Url, term: &SearchTerm) -> Url {
    let mut url = endpoint.clone();
    url.set_query(Some(&format!(
        "q={}&sort={}&order={}",
        term.as_query_param(),
        SORT,
        ORDER
    )));
    url
}
