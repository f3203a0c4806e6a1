// src/render/cards.rs
// =============================================================================
// This module turns search results into cards.
//
// Each item becomes a Card, laid out by templates/results.html.jinja as:
//   <a class="repoBlock" href="{html_url}" target="_blank">
//     <h2 class="repoTitle" title="{name}">{name, maybe truncated}</h2>
//     <img src="{owner.avatar_url}">
//     <p>{description, maybe truncated}</p>
//   </a>
//
// Every call is a full rebuild: the container is cleared first, nothing is
// diffed or reused.
//
// Rust concepts:
// - chars(): Counting and cutting by character, never by byte, so
//   multi-byte text cannot be split in the middle of a character
// =============================================================================

use super::dom::{Card, ResultsContainer};
use crate::search::Item;

pub const ELLIPSIS: &str = "...";

/// Cosmetic limits applied while rendering cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardOptions {
    /// Longer descriptions are cut to this many characters plus an ellipsis
    pub description_limit: usize,
    /// Longer names are cut to this many characters plus an ellipsis;
    /// None leaves eliding to the stylesheet alone
    pub title_limit: Option<usize>,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            description_limit: 200,
            title_limit: Some(15),
        }
    }
}

// Rebuilds the container from the given items
//
// An empty slice leaves the container empty.
pub fn render(container: &mut ResultsContainer, items: &[Item], options: &CardOptions) {
    container.clear();

    for item in items {
        container.append_child(card(item, options));
    }
}

// Builds the card for one item
pub fn card(item: &Item, options: &CardOptions) -> Card {
    let title = match options.title_limit {
        Some(limit) => truncate(&item.name, limit),
        None => item.name.clone(),
    };

    let description = item.description.as_deref().unwrap_or("");

    Card {
        href: item.html_url.clone(),
        title,
        full_title: item.name.clone(),
        avatar_url: item.owner.avatar_url.clone(),
        description: truncate(description, options.description_limit),
    }
}

/// Cuts `text` to `limit` characters followed by "..." when it is longer.
///
/// Text of exactly `limit` characters is returned unchanged.
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Owner;
    use scraper::{Html, Selector};

    fn item(name: &str, description: Option<&str>) -> Item {
        Item {
            name: name.to_string(),
            description: description.map(str::to_string),
            html_url: format!("https://github.com/someone/{}", name),
            owner: Owner {
                avatar_url: format!("https://avatars.example.com/{}.png", name),
            },
        }
    }

    fn rendered(items: &[Item]) -> Html {
        let mut container = ResultsContainer::default();
        render(&mut container, items, &CardOptions::default());
        Html::parse_fragment(&container.to_html().unwrap())
    }

    #[test]
    fn test_card_structure() {
        let html = rendered(&[item("tokio", Some("A runtime")), item("serde", None)]);

        let cards = Selector::parse("#results > a.repoBlock").unwrap();
        let links: Vec<_> = html.select(&cards).collect();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].value().attr("href"), Some("https://github.com/someone/tokio"));
        assert_eq!(links[0].value().attr("target"), Some("_blank"));

        let heading = Selector::parse("a.repoBlock > h2.repoTitle").unwrap();
        let titles: Vec<String> = html
            .select(&heading)
            .map(|h| h.text().collect::<String>())
            .collect();
        assert_eq!(titles, vec!["tokio", "serde"]);

        let image = Selector::parse("a.repoBlock > img").unwrap();
        let first_image = html.select(&image).next().unwrap();
        assert_eq!(
            first_image.value().attr("src"),
            Some("https://avatars.example.com/tokio.png")
        );

        let paragraph = Selector::parse("a.repoBlock > p").unwrap();
        let descriptions: Vec<String> = html
            .select(&paragraph)
            .map(|p| p.text().collect::<String>())
            .collect();
        assert_eq!(descriptions, vec!["A runtime", ""]);
    }

    #[test]
    fn test_long_description_is_truncated() {
        let long = "x".repeat(201);
        let card = card(&item("a", Some(&long)), &CardOptions::default());
        assert_eq!(card.description, format!("{}...", "x".repeat(200)));
    }

    #[test]
    fn test_description_of_exactly_limit_is_kept() {
        let exact = "y".repeat(200);
        let card = card(&item("a", Some(&exact)), &CardOptions::default());
        assert_eq!(card.description, exact);
    }

    #[test]
    fn test_long_name_is_hard_truncated() {
        let card = card(&item("a-very-long-repository-name", None), &CardOptions::default());
        assert_eq!(card.title, "a-very-long-rep...");
        assert_eq!(card.full_title, "a-very-long-repository-name");
    }

    #[test]
    fn test_title_limit_can_be_disabled() {
        let options = CardOptions {
            title_limit: None,
            ..CardOptions::default()
        };
        let card = card(&item("a-very-long-repository-name", None), &options);
        assert_eq!(card.title, "a-very-long-repository-name");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("héllo wörld", 5), "héllo...");
        assert_eq!(truncate("日本語", 3), "日本語");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_render_replaces_previous_cards() {
        let mut container = ResultsContainer::default();
        render(&mut container, &[item("a", None), item("b", None)], &CardOptions::default());
        assert_eq!(container.children().len(), 2);

        render(&mut container, &[item("c", None)], &CardOptions::default());
        assert_eq!(container.children().len(), 1);

        render(&mut container, &[], &CardOptions::default());
        assert!(container.is_empty());
    }
}
