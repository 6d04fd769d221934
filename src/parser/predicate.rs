//! WHERE predicate extraction.

use regex::Regex;
use std::sync::LazyLock;

use crate::ast::{CompareOp, Predicate};

static WHERE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"where\s+(\w+)\s*(=|>|<|like)\s*(\w+)").unwrap());

/// Extract the single `column op value` predicate, if the text has a
/// well-formed one. Only attempted when the literal "where" occurs; a
/// malformed condition is not an error, the clause is simply dropped.
pub fn extract(text: &str) -> Option<Predicate> {
    if !text.contains("where") {
        return None;
    }
    let cap = WHERE_RE.captures(text)?;
    let op = match &cap[2] {
        "=" => CompareOp::Eq,
        ">" => CompareOp::Gt,
        "<" => CompareOp::Lt,
        _ => CompareOp::Like,
    };
    Some(Predicate {
        column: cap[1].to_string(),
        op,
        value: cap[3].to_string(),
    })
}
