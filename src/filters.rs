//! Filter and sort operations over entry collections
//!
//! None of these mutate their input. Each returns a new collection, so callers
//! that want to go back to the unfiltered list keep their own copy.

use std::cmp::Reverse;

use crate::entry::Entry;

/// Entries whose title has strictly more than `limit` words.
///
/// A `limit` of zero or less always yields an empty list.
pub fn filter_by_min_title_words(entries: &[Entry], limit: i64) -> Vec<Entry> {
    if limit <= 0 {
        return Vec::new();
    }
    entries
        .iter()
        .filter(|entry| word_count(entry) > limit)
        .cloned()
        .collect()
}

/// Entries whose title has at most `limit` words.
///
/// A `limit` of zero or less always yields an empty list.
pub fn filter_by_max_title_words(entries: &[Entry], limit: i64) -> Vec<Entry> {
    if limit <= 0 {
        return Vec::new();
    }
    entries
        .iter()
        .filter(|entry| word_count(entry) <= limit)
        .cloned()
        .collect()
}

/// Most commented first; ties keep their input order
pub fn sort_by_comments_descending(entries: &[Entry]) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|entry| Reverse(entry.comment_count()));
    sorted
}

/// Highest score first; ties keep their input order
pub fn sort_by_score_descending(entries: &[Entry]) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|entry| Reverse(entry.score()));
    sorted
}

fn word_count(entry: &Entry) -> i64 {
    i64::try_from(entry.title_word_count()).unwrap_or(i64::MAX)
}
