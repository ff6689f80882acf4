//! Error types for fetching, extraction and queries

use std::path::PathBuf;

use thiserror::Error;

/// Failures while fetching or extracting a front page
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("invalid url `{url}`: {message}")]
    InvalidUrl { url: String, message: String },

    /// The request never produced a response (DNS, TLS, timeout, body read)
    #[error("failed to fetch {url}: {message}")]
    Transport { url: String, message: String },

    /// A layout signature could not be compiled into a CSS selector
    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    /// A listing row is not followed by the metadata row the page shape requires
    #[error("listing row {index} has no following metadata row")]
    StructuralMismatch { index: usize },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Contract violations raised by the query layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid input: {0}")]
    InvalidInputKind(String),
}
