//! Table-name extraction.
//!
//! Every operation locates its table through a different phrase shape, so
//! each statement builder calls the finder that fits it. Table tokens are
//! single `\w+` words; the first match in the text wins.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{TranslateError, TranslateResult};

static CREATE_TABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"table (?:for |named )?(\w+)").unwrap());

static FROM_OR_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"from (\w+)|(\w+) table").unwrap());

static SUFFIX_OR_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+) table|table (\w+)").unwrap());

static INTO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(?:into|to) (\w+)").unwrap());

static UPDATE_TRIGGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:update|modify|change) (\w+)").unwrap());

static FIRST_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w+)").unwrap());

/// Table name for CREATE: "table X", "table for X", "table named X".
pub fn create_target(text: &str) -> TranslateResult<String> {
    CREATE_TABLE_RE
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(TranslateError::TableNotFound)
}

/// Table name for SELECT and DELETE: "from X", else "X table".
pub fn query_target(text: &str) -> TranslateResult<String> {
    let cap = FROM_OR_SUFFIX_RE
        .captures(text)
        .ok_or(TranslateError::TableNotFound)?;
    first_group(&cap)
}

/// Table name for UPDATE: "X table" or "table X", else the word after the
/// update trigger itself ("update customers set …" has no "table" literal).
pub fn update_target(text: &str) -> TranslateResult<String> {
    if let Some(cap) = SUFFIX_OR_PREFIX_RE.captures(text) {
        return first_group(&cap);
    }
    UPDATE_TRIGGER_RE
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(TranslateError::TableNotFound)
}

/// Table name for INSERT: "into X" or "to X", else the first word of the
/// text. Under the fallback a bare insert resolves to the trigger word
/// itself.
pub fn insert_target(text: &str) -> TranslateResult<String> {
    if let Some(m) = INTO_RE.captures(text).and_then(|cap| cap.get(1)) {
        return Ok(m.as_str().to_string());
    }
    FIRST_WORD_RE
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(TranslateError::TableNotFound)
}

/// First filled capture group of an alternation pattern.
fn first_group(cap: &regex::Captures<'_>) -> TranslateResult<String> {
    cap.iter()
        .skip(1)
        .flatten()
        .next()
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| TranslateError::Internal("table pattern matched without a capture".into()))
}
