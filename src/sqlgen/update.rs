//! UPDATE assembly.

use crate::error::TranslateResult;
use crate::parser::{predicate, table, values};

/// Build `UPDATE table SET …;`.
///
/// Assignments come from "set X to Y" phrases, every value single-quoted.
/// Without any, a whole-statement placeholder is emitted and the WHERE text
/// is not even consulted.
pub fn build_update(text: &str) -> TranslateResult<String> {
    let table = table::update_target(text)?;

    let pairs = values::set_pairs(text);
    if pairs.is_empty() {
        return Ok(format!("UPDATE {table} SET column = value WHERE condition;"));
    }

    let assignments: Vec<String> = pairs.iter().map(ToString::to_string).collect();
    let mut sql = format!("UPDATE {table} SET {}", assignments.join(", "));

    if let Some(pred) = predicate::extract(text) {
        sql.push_str(" WHERE ");
        sql.push_str(&pred.to_string());
    }

    sql.push(';');
    Ok(sql)
}
