//! Caller-owned scraping session
//!
//! Holds the most recent entry collection. Every extraction replaces the whole
//! collection; a failed refresh keeps the previous one.

use std::time::Instant;

use scraper::Html;

use crate::config::ScraperConfig;
use crate::entry::Entry;
use crate::error::ScrapeError;
use crate::extractors::{extract_entries, ListingSelectors};
use crate::fetch::fetch_page;

#[derive(Debug)]
pub struct Session {
    config: ScraperConfig,
    selectors: ListingSelectors,
    entries: Vec<Entry>,
    last_refreshed: Option<Instant>,
}

impl Session {
    pub fn new(config: ScraperConfig) -> Result<Self, ScrapeError> {
        let selectors = ListingSelectors::from_layout(&config.layout)?;
        Ok(Self {
            config,
            selectors,
            entries: Vec::new(),
            last_refreshed: None,
        })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Fetch the configured page and extract its entries
    pub fn refresh(&mut self) -> Result<&[Entry], ScrapeError> {
        let html = fetch_page(&self.config)?;
        self.load_html(&html)
    }

    /// Extract entries from markup the caller already has
    pub fn load_html(&mut self, html: &str) -> Result<&[Entry], ScrapeError> {
        let document = Html::parse_document(html);
        let entries = extract_entries(&document, self.config.max_entries, &self.selectors)?;

        self.entries = entries;
        self.last_refreshed = Some(Instant::now());
        Ok(&self.entries)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn last_refreshed(&self) -> Option<Instant> {
        self.last_refreshed
    }
}
