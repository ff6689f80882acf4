//! Hacker News front page scraper
//!
//! Extracts ranked entries from the front page markup and provides
//! filter/sort operations over them:
//! - Entry model with self-correcting field validation
//! - Extraction of title, rank, comment count and score per listing
//! - Word-count filters and stable descending sorts
//! - Blocking fetch of the live page and a caller-owned session

pub mod config;
pub mod entry;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod filters;
pub mod query;
pub mod session;

pub use config::{PageLayout, ScraperConfig};
pub use entry::{Entry, INVALID_NUMBER, INVALID_TITLE};
pub use error::{QueryError, ScrapeError};
pub use extractors::{extract_entries, parse_entries, parse_entries_with_layout, ListingSelectors};
pub use fetch::fetch_page;
pub use filters::*;
pub use query::{apply, apply_json, entries_from_value, QueryOp};
pub use session::Session;
