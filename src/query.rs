//! Query pipeline over untyped JSON input
//!
//! The typed functions in [`crate::filters`] cannot receive anything but entries.
//! This layer accepts arbitrary JSON, checks that it really is a list of entries
//! before running anything, and rejects it as a whole otherwise.

use serde::Deserialize;
use serde_json::Value;

use crate::entry::Entry;
use crate::error::QueryError;
use crate::filters;

const ENTRY_FIELDS: [&str; 4] = ["title", "rank", "comment_count", "score"];

/// Single pipeline operation, e.g. `{"op": "min_title_words", "limit": 5}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum QueryOp {
    MinTitleWords { limit: i64 },
    MaxTitleWords { limit: i64 },
    SortByComments,
    SortByScore,
}

impl QueryOp {
    pub fn from_value(value: &Value) -> Result<Self, QueryError> {
        QueryOp::deserialize(value)
            .map_err(|e| QueryError::InvalidInputKind(format!("bad query operation: {e}")))
    }

    pub fn run(&self, entries: &[Entry]) -> Vec<Entry> {
        match *self {
            QueryOp::MinTitleWords { limit } => filters::filter_by_min_title_words(entries, limit),
            QueryOp::MaxTitleWords { limit } => filters::filter_by_max_title_words(entries, limit),
            QueryOp::SortByComments => filters::sort_by_comments_descending(entries),
            QueryOp::SortByScore => filters::sort_by_score_descending(entries),
        }
    }
}

/// Convert a JSON array of entry objects into entries.
///
/// Each element must be an object with exactly the entry fields. Field values
/// go through the entry validators, so a bad value becomes a sentinel while a
/// non-entry element fails the whole input.
pub fn entries_from_value(value: &Value) -> Result<Vec<Entry>, QueryError> {
    let items = value.as_array().ok_or_else(|| {
        QueryError::InvalidInputKind(format!("expected a list of entries, got {}", kind_of(value)))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            entry_from_value(item).ok_or_else(|| {
                QueryError::InvalidInputKind(format!(
                    "element {index} is not an entry ({})",
                    kind_of(item)
                ))
            })
        })
        .collect()
}

fn entry_from_value(value: &Value) -> Option<Entry> {
    let obj = value.as_object()?;
    if obj.len() != ENTRY_FIELDS.len() || !ENTRY_FIELDS.iter().all(|f| obj.contains_key(*f)) {
        return None;
    }

    Some(Entry::new(
        obj["title"].clone(),
        obj["rank"].clone(),
        obj["comment_count"].clone(),
        obj["score"].clone(),
    ))
}

/// Validate `input`, then apply `ops` left to right
pub fn apply(input: &Value, ops: &[QueryOp]) -> Result<Vec<Entry>, QueryError> {
    let entries = entries_from_value(input)?;
    Ok(ops.iter().fold(entries, |current, op| op.run(&current)))
}

/// Like [`apply`], with the operations also given as a JSON array
pub fn apply_json(input: &Value, ops: &Value) -> Result<Vec<Entry>, QueryError> {
    let entries = entries_from_value(input)?;
    let ops = ops
        .as_array()
        .ok_or_else(|| QueryError::InvalidInputKind(format!("expected a list of operations, got {}", kind_of(ops))))?
        .iter()
        .map(QueryOp::from_value)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ops.iter().fold(entries, |current, op| op.run(&current)))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
