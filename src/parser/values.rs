//! Explicit INSERT lists and UPDATE assignments.

use regex::Regex;
use std::sync::LazyLock;

use crate::ast::{InsertValues, SetPair};

static INSERT_COLUMNS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"columns? ?(?:is|are|:)? ?(\w+(?:,\s*\w+)*)").unwrap());

/// The value run is anything up to the first period, so trailing sentence
/// punctuation doesn't leak into the list.
static INSERT_VALUES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"values? ?(?:is|are|:)? ?([^.]+)").unwrap());

static SET_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"set (\w+) to (\w+)").unwrap());

/// Explicit "columns … values …" lists for INSERT. Both phrases must be
/// present; the two lists are positional and never arity-checked against
/// each other.
pub fn insert_lists(text: &str) -> Option<InsertValues> {
    let columns = INSERT_COLUMNS_RE.captures(text)?;
    let values = INSERT_VALUES_RE.captures(text)?;
    Some(InsertValues {
        columns: split_list(&columns[1]),
        values: split_list(&values[1]),
    })
}

/// Every "set X to Y" assignment, in order of appearance.
pub fn set_pairs(text: &str) -> Vec<SetPair> {
    SET_PAIR_RE
        .captures_iter(text)
        .map(|cap| SetPair {
            column: cap[1].to_string(),
            value: cap[2].to_string(),
        })
        .collect()
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|item| item.trim().to_string()).collect()
}
