// src/search/types.rs
// =============================================================================
// Data types for the search endpoint's JSON response.
//
// The endpoint wraps the result list in an envelope:
//   { "total_count": 42, "incomplete_results": false, "items": [ ... ] }
//
// Missing item fields fall back to empty values so a malformed record
// renders as blank text instead of failing the whole query.
// =============================================================================

use serde::{Deserialize, Serialize};

/// The top-level response of a repository search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// One repository in the result list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub name: String,
    /// Repositories without a description come back as `null`
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub owner: Owner,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub avatar_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_envelope() {
        let body = r#"{
            "total_count": 2,
            "incomplete_results": false,
            "items": [
                {
                    "id": 724712,
                    "name": "rust",
                    "full_name": "rust-lang/rust",
                    "description": "Empowering everyone to build reliable and efficient software.",
                    "html_url": "https://github.com/rust-lang/rust",
                    "stargazers_count": 90000,
                    "owner": { "login": "rust-lang", "avatar_url": "https://avatars.githubusercontent.com/u/5430905?v=4" }
                },
                {
                    "name": "no-description",
                    "description": null,
                    "html_url": "https://github.com/someone/no-description",
                    "owner": { "avatar_url": "https://avatars.githubusercontent.com/u/1?v=4" }
                }
            ]
        }"#;

        let result: QueryResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.total_count, 2);
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].name, "rust");
        assert_eq!(
            result.items[0].owner.avatar_url,
            "https://avatars.githubusercontent.com/u/5430905?v=4"
        );
        assert_eq!(result.items[1].description, None);
    }

    #[test]
    fn test_missing_item_fields_degrade_to_blank() {
        let body = r#"{ "total_count": 1, "items": [ { "name": "lonely" } ] }"#;
        let result: QueryResult = serde_json::from_str(body).unwrap();
        let item = &result.items[0];
        assert_eq!(item.name, "lonely");
        assert_eq!(item.html_url, "");
        assert_eq!(item.owner.avatar_url, "");
        assert!(!result.incomplete_results);
    }

    #[test]
    fn test_non_json_body_is_an_error() {
        assert!(serde_json::from_str::<QueryResult>("<html>rate limited</html>").is_err());
    }
}
