//! Field locators for a single listing block
//!
//! Each locator returns `None` when its target node or value is absent. The
//! caller hands that `None` to the entry constructor, which turns it into the
//! field's sentinel.

use scraper::ElementRef;
use tracing::warn;

use super::ListingSelectors;

/// Anchor text of the title container
pub fn extract_title(listing: ElementRef<'_>, selectors: &ListingSelectors) -> Option<String> {
    let container = listing.select(&selectors.title).next()?;
    let anchor = container.select(&selectors.title_anchor).next()?;
    Some(anchor.text().collect())
}

pub fn extract_rank(listing: ElementRef<'_>, selectors: &ListingSelectors) -> Option<i64> {
    let container = listing.select(&selectors.rank).next()?;
    extract_numeric(&element_text(container))
}

/// Comment count from the first anchor mentioning comments.
///
/// No such anchor means the listing has no comments yet, so this yields
/// `Some(0)` rather than `None`.
pub fn extract_comment_count(subtext: ElementRef<'_>, selectors: &ListingSelectors) -> Option<i64> {
    for anchor in subtext.select(&selectors.comment) {
        let text = element_text(anchor);
        if text.contains("comment") && has_digit(&text) {
            return extract_numeric(&text);
        }
    }
    Some(0)
}

pub fn extract_score(subtext: ElementRef<'_>, selectors: &ListingSelectors) -> Option<i64> {
    let container = subtext.select(&selectors.score).next()?;
    extract_numeric(&element_text(container))
}

/// Concatenate every decimal digit of `text` and parse the result.
///
/// Text without digits has no value (not zero).
pub fn extract_numeric(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    match digits.parse() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!(digits = %digits, error = %e, "numeric field out of range");
            None
        }
    }
}

fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageLayout;
    use scraper::{Html, Selector};

    fn selectors() -> ListingSelectors {
        ListingSelectors::from_layout(&PageLayout::default()).unwrap()
    }

    fn first<'a>(document: &'a Html, css: &str) -> ElementRef<'a> {
        let selector = Selector::parse(css).unwrap();
        document.select(&selector).next().unwrap()
    }

    #[test]
    fn test_extract_numeric() {
        assert_eq!(extract_numeric("1."), Some(1));
        assert_eq!(extract_numeric("363 points"), Some(363));
        assert_eq!(extract_numeric("1,024\u{a0}comments"), Some(1024));
        assert_eq!(extract_numeric("a1b2c3"), Some(123));
        assert_eq!(extract_numeric("discuss"), None);
        assert_eq!(extract_numeric(""), None);
        assert_eq!(extract_numeric("99999999999999999999999"), None);
    }

    #[test]
    fn test_title_and_rank() {
        let html = r#"<table><tr class="athing">
            <td><span class="rank">12.</span></td>
            <td><span class="titleline"><a href="https://example.com">Show HN: Odin</a>
                <span class="sitebit">(<a href="from?site=example.com">example.com</a>)</span></span></td>
        </tr></table>"#;
        let document = Html::parse_document(html);
        let listing = first(&document, "tr.athing");

        assert_eq!(extract_title(listing, &selectors()).as_deref(), Some("Show HN: Odin"));
        assert_eq!(extract_rank(listing, &selectors()), Some(12));
    }

    #[test]
    fn test_missing_title_anchor_and_rank_digits() {
        let html = r#"<table><tr class="athing">
            <td><span class="rank">.</span></td>
            <td><span class="titleline">No link here</span></td>
        </tr></table>"#;
        let document = Html::parse_document(html);
        let listing = first(&document, "tr.athing");

        assert_eq!(extract_title(listing, &selectors()), None);
        assert_eq!(extract_rank(listing, &selectors()), None);
    }

    #[test]
    fn test_comment_count_picks_comment_anchor() {
        let html = r#"<table><tr><td class="subtext">
            <span class="score">84 points</span> by <a href="user?id=pg">pg</a>
            <a href="item?id=1">3 hours ago</a> | <a href="hide?id=1">hide</a> |
            <a href="item?id=1">62&nbsp;comments</a>
        </td></tr></table>"#;
        let document = Html::parse_document(html);
        let subtext = first(&document, "td.subtext");

        assert_eq!(extract_comment_count(subtext, &selectors()), Some(62));
        assert_eq!(extract_score(subtext, &selectors()), Some(84));
    }

    #[test]
    fn test_discuss_link_means_zero_comments() {
        let html = r#"<table><tr><td class="subtext">
            <span class="score">5 points</span>
            <a href="item?id=2">discuss</a>
        </td></tr></table>"#;
        let document = Html::parse_document(html);
        let subtext = first(&document, "td.subtext");

        assert_eq!(extract_comment_count(subtext, &selectors()), Some(0));
        assert_eq!(extract_score(subtext, &selectors()), Some(5));
    }

    #[test]
    fn test_missing_score() {
        let html = r#"<table><tr><td class="subtext">
            <a href="item?id=3">1 hour ago</a>
        </td></tr></table>"#;
        let document = Html::parse_document(html);
        let subtext = first(&document, "td.subtext");

        assert_eq!(extract_score(subtext, &selectors()), None);
    }
}
