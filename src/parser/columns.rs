//! Column extraction with type inference for CREATE TABLE requests.

use regex::Regex;
use std::sync::LazyLock;

use crate::ast::ColumnSpec;
use crate::error::{TranslateError, TranslateResult};
use crate::lexicon;

static CONNECTOR_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:with|having|containing) ([\w\s,]+)").unwrap());

static COMMA_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+(?:\s*,\s*\w+)+)").unwrap());

/// Find the comma-joined column candidates and infer a storage type for each.
///
/// The word run after a connector ("with name, email, phone") wins; without a
/// connector, the first comma-joined run anywhere in the text is used. Stop
/// words and empty tokens are dropped; duplicates and order survive as
/// written.
pub fn extract(text: &str) -> TranslateResult<Vec<ColumnSpec>> {
    let Some(run) = CONNECTOR_RUN_RE
        .captures(text)
        .and_then(|cap| cap.get(1))
        .or_else(|| COMMA_RUN_RE.captures(text).and_then(|cap| cap.get(1)))
    else {
        return Err(TranslateError::NoColumnsFound);
    };

    let columns: Vec<ColumnSpec> = run
        .as_str()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && !lexicon::COLUMN_STOP_WORDS.contains(token))
        .map(|token| ColumnSpec {
            name: token.to_string(),
            sql_type: lexicon::infer_sql_type(token).to_string(),
        })
        .collect();

    if columns.is_empty() {
        return Err(TranslateError::NoColumnsFound);
    }
    Ok(columns)
}
