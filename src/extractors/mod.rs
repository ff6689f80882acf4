//! Front page extraction
//!
//! Walks the listing rows of a parsed page in document order and builds one
//! [`Entry`] per row. Title and rank come from the listing row itself; comment
//! count and score come from the subtext cell of the row that follows it.

mod fields;

pub use fields::*;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::config::PageLayout;
use crate::entry::Entry;
use crate::error::ScrapeError;

/// Compiled selectors for a [`PageLayout`]
#[derive(Debug, Clone)]
pub struct ListingSelectors {
    pub listing: Selector,
    pub title: Selector,
    pub title_anchor: Selector,
    pub rank: Selector,
    pub subtext: Selector,
    pub comment: Selector,
    pub score: Selector,
    pub sibling_tag: String,
}

impl ListingSelectors {
    pub fn from_layout(layout: &PageLayout) -> Result<Self, ScrapeError> {
        Ok(Self {
            listing: parse_selector(&tag_class(&layout.listing_tag, &layout.listing_class))?,
            title: parse_selector(&tag_class(&layout.title_tag, &layout.title_class))?,
            title_anchor: parse_selector("a")?,
            rank: parse_selector(&tag_class(&layout.rank_tag, &layout.rank_class))?,
            subtext: parse_selector(&tag_class(&layout.subtext_tag, &layout.subtext_class))?,
            comment: parse_selector(&layout.comment_tag)?,
            score: parse_selector(&tag_class(&layout.score_tag, &layout.score_class))?,
            sibling_tag: layout.sibling_tag.to_ascii_lowercase(),
        })
    }
}

fn tag_class(tag: &str, class: &str) -> String {
    format!("{tag}.{class}")
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Parse `html` and extract up to `max_entries` entries with the default layout
pub fn parse_entries(html: &str, max_entries: usize) -> Result<Vec<Entry>, ScrapeError> {
    parse_entries_with_layout(html, max_entries, &PageLayout::default())
}

pub fn parse_entries_with_layout(
    html: &str,
    max_entries: usize,
    layout: &PageLayout,
) -> Result<Vec<Entry>, ScrapeError> {
    let document = Html::parse_document(html);
    let selectors = ListingSelectors::from_layout(layout)?;
    extract_entries(&document, max_entries, &selectors)
}

/// Extract the first `max_entries` listings of `document`.
///
/// Missing title, rank or score nodes never abort a record. A listing row with
/// no following metadata row does, since the output would otherwise stop lining
/// up with the page ranking.
pub fn extract_entries(
    document: &Html,
    max_entries: usize,
    selectors: &ListingSelectors,
) -> Result<Vec<Entry>, ScrapeError> {
    let entries = document
        .select(&selectors.listing)
        .take(max_entries)
        .enumerate()
        .map(|(index, listing)| extract_entry(index, listing, selectors))
        .collect::<Result<Vec<_>, _>>()?;

    info!(count = entries.len(), max_entries, "extracted front page entries");
    Ok(entries)
}

fn extract_entry(
    index: usize,
    listing: ElementRef<'_>,
    selectors: &ListingSelectors,
) -> Result<Entry, ScrapeError> {
    let title = extract_title(listing, selectors);
    let rank = extract_rank(listing, selectors);

    let metadata_row = next_sibling_row(listing, &selectors.sibling_tag)
        .ok_or(ScrapeError::StructuralMismatch { index })?;

    let (comment_count, score) = match metadata_row.select(&selectors.subtext).next() {
        Some(subtext) => (
            extract_comment_count(subtext, selectors),
            extract_score(subtext, selectors),
        ),
        None => (None, None),
    };

    let entry = Entry::new(title, rank, comment_count, score);
    debug!(index, %entry, "extracted entry");
    Ok(entry)
}

fn next_sibling_row<'a>(listing: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    listing
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == tag)
}
