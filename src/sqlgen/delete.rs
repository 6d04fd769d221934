//! DELETE assembly.

use crate::error::TranslateResult;
use crate::parser::{predicate, table};

/// Build `DELETE FROM table …;`, with a WHERE clause when one can be
/// extracted. No predicate means an unguarded full-table delete; the
/// statement is emitted as-is.
pub fn build_delete(text: &str) -> TranslateResult<String> {
    let table = table::query_target(text)?;

    let mut sql = format!("DELETE FROM {table}");
    if let Some(pred) = predicate::extract(text) {
        sql.push_str(" WHERE ");
        sql.push_str(&pred.to_string());
    }
    sql.push(';');
    Ok(sql)
}
