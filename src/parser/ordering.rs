//! ORDER BY extraction.

use regex::Regex;
use std::sync::LazyLock;

use crate::ast::{OrderKey, SortOrder};

static ORDER_BY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"order by (\w+(?:,\s*\w+)*)").unwrap());

/// Extract the "order by …" column list. Direction is global: one "desc" or
/// "descending" anywhere in the text flips every column to DESC.
pub fn extract(text: &str) -> Vec<OrderKey> {
    let Some(cap) = ORDER_BY_RE.captures(text) else {
        return Vec::new();
    };

    let direction = if text.contains("descending") || text.contains("desc") {
        SortOrder::Desc
    } else {
        SortOrder::Asc
    };

    cap[1]
        .split(',')
        .map(|column| OrderKey {
            column: column.trim().to_string(),
            direction,
        })
        .collect()
}
