//! Front page entry model
//!
//! Every assignment runs through a field validator. A value outside the field's
//! contract never fails the assignment: it is replaced by the field's sentinel
//! and a warning is logged.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Stored in `title` when the supplied value is not text
pub const INVALID_TITLE: &str = "BAD STRING";

/// Stored in integer fields when the supplied value is not a non-negative integer
pub const INVALID_NUMBER: i64 = -1;

/// One ranked listing row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    title: String,
    rank: i64,
    comment_count: i64,
    score: i64,
}

impl Entry {
    /// Build an entry, validating each value like the matching setter would.
    ///
    /// Any `serde_json::Value` conversion is accepted, so absent values can be
    /// passed as `None` and end up as sentinels.
    pub fn new(
        title: impl Into<Value>,
        rank: impl Into<Value>,
        comment_count: impl Into<Value>,
        score: impl Into<Value>,
    ) -> Self {
        Self {
            title: validate_title(title.into()),
            rank: validate_number(rank.into(), "rank"),
            comment_count: validate_number(comment_count.into(), "comment_count"),
            score: validate_number(score.into(), "score"),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rank(&self) -> i64 {
        self.rank
    }

    pub fn comment_count(&self) -> i64 {
        self.comment_count
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn set_title(&mut self, value: impl Into<Value>) {
        self.title = validate_title(value.into());
    }

    pub fn set_rank(&mut self, value: impl Into<Value>) {
        self.rank = validate_number(value.into(), "rank");
    }

    pub fn set_comment_count(&mut self, value: impl Into<Value>) {
        self.comment_count = validate_number(value.into(), "comment_count");
    }

    pub fn set_score(&mut self, value: impl Into<Value>) {
        self.score = validate_number(value.into(), "score");
    }

    /// Number of whitespace separated words in the title
    pub fn title_word_count(&self) -> usize {
        self.title.split_whitespace().count()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Entry(rank={}, title='{}', commentCount={}, score={})>",
            self.rank, self.title, self.comment_count, self.score
        )
    }
}

fn validate_title(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => {
            warn!(field = "title", value = %other, "title must be a string");
            INVALID_TITLE.to_string()
        }
    }
}

fn validate_number(value: Value, field: &'static str) -> i64 {
    // Floats and booleans are rejected even when they hold a whole number.
    match value.as_i64() {
        Some(n) if n >= 0 => n,
        _ => {
            warn!(field, value = %value, "{field} must be a non-negative integer");
            INVALID_NUMBER
        }
    }
}
