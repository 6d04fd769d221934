//! GROUP BY and aggregate-call extraction.

use regex::Regex;
use std::sync::LazyLock;

use crate::ast::{Aggregate, AggregateFunc, GroupSpec};
use crate::lexicon;

static GROUP_BY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"group by (\w+(?:,\s*\w+)*)").unwrap());

/// One pattern per aggregate word, probed independently so the result order
/// follows the vocabulary table, not the text.
static AGGREGATE_RES: LazyLock<Vec<(AggregateFunc, Regex)>> = LazyLock::new(|| {
    lexicon::AGGREGATE_TRIGGERS
        .iter()
        .map(|(word, func)| {
            let re = Regex::new(&format!(r"{word} (?:of|on|for) (\w+)")).unwrap();
            (*func, re)
        })
        .collect()
});

/// Take the "group by …" column list plus every aggregate phrase in the text.
/// Never fails; an absent phrase just leaves the field empty.
pub fn extract(text: &str) -> GroupSpec {
    let columns: Vec<String> = GROUP_BY_RE
        .captures(text)
        .map(|cap| cap[1].split(',').map(|c| c.trim().to_string()).collect())
        .unwrap_or_default();

    let aggregates: Vec<Aggregate> = AGGREGATE_RES
        .iter()
        .filter_map(|(func, re)| {
            re.captures(text).map(|cap| Aggregate {
                func: *func,
                column: cap[1].to_string(),
            })
        })
        .collect();

    GroupSpec {
        columns,
        aggregates,
    }
}
