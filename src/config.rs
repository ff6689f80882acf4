//! Scraper configuration
//!
//! All fields are optional when loaded from JSON; missing ones fall back to the
//! Hacker News front page defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;

pub const DEFAULT_URL: &str = "https://news.ycombinator.com/news";
pub const DEFAULT_USER_AGENT: &str = "webscraper (+https://github.com/mikirosario/webscraper)";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_ENTRIES: usize = 30;

/// Tag and class signatures of the markup the extractor walks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub listing_tag: String,
    pub listing_class: String,
    pub title_tag: String,
    pub title_class: String,
    pub rank_tag: String,
    pub rank_class: String,
    pub comment_tag: String,
    pub score_tag: String,
    pub score_class: String,
    /// Tag of the metadata row that follows each listing row
    pub sibling_tag: String,
    pub subtext_tag: String,
    pub subtext_class: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            listing_tag: "tr".into(),
            listing_class: "athing".into(),
            title_tag: "span".into(),
            title_class: "titleline".into(),
            rank_tag: "span".into(),
            rank_class: "rank".into(),
            comment_tag: "a".into(),
            score_tag: "span".into(),
            score_class: "score".into(),
            sibling_tag: "tr".into(),
            subtext_tag: "td".into(),
            subtext_class: "subtext".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub max_entries: usize,
    pub layout: PageLayout,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_entries: DEFAULT_MAX_ENTRIES,
            layout: PageLayout::default(),
        }
    }
}

impl ScraperConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ScrapeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ScrapeError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScrapeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
