//! Join phrase extraction.

use regex::Regex;
use std::sync::LazyLock;

use crate::ast::{JoinCondition, JoinSpec, OperationKind};
use crate::error::{TranslateError, TranslateResult};
use crate::lexicon;

static JOIN_TABLES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"join (\w+) (?:with|and) (\w+)").unwrap());

static USING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"using (\w+)").unwrap());

static ON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"on (\w+)\.(\w+) ?= ?(\w+)\.(\w+)").unwrap());

/// Whether the text mentions joining at all. Same trigger words the
/// classifier uses for the join category, so "combine" and "merge" count.
pub fn mentioned(text: &str) -> bool {
    lexicon::triggers_for(OperationKind::Join)
        .iter()
        .any(|t| text.contains(*t))
}

/// Pull the join shape out of the text: the flavor keyword, the two tables
/// named by "join A with B" / "join A and B", and a USING or ON condition
/// when one is spelled out.
pub fn extract(text: &str) -> TranslateResult<JoinSpec> {
    let kind = lexicon::join_kind_in(text);
    let cap = JOIN_TABLES_RE
        .captures(text)
        .ok_or(TranslateError::JoinTablesNotFound)?;
    let left_table = cap[1].to_string();
    let right_table = cap[2].to_string();

    let condition = if let Some(using) = USING_RE.captures(text) {
        JoinCondition::Using(using[1].to_string())
    } else if let Some(on) = ON_RE.captures(text) {
        JoinCondition::On {
            left_table: on[1].to_string(),
            left_column: on[2].to_string(),
            right_table: on[3].to_string(),
            right_column: on[4].to_string(),
        }
    } else {
        JoinCondition::Fallback
    };

    Ok(JoinSpec {
        kind,
        left_table,
        right_table,
        condition,
    })
}
