//! SELECT assembly.
//!
//! Clause order in the output is fixed: select list, FROM, JOIN, WHERE,
//! GROUP BY, ORDER BY. Optional clauses that can't be pinned down are
//! dropped, never fatal; only the table name is required.

use crate::error::TranslateResult;
use crate::parser::{grouping, joins, ordering, predicate, table};

/// Build the SELECT statement for the request text.
pub fn build_select(text: &str) -> TranslateResult<String> {
    let table = table::query_target(text)?;
    let group = grouping::extract(text);

    let mut sql = String::from("SELECT ");
    if group.is_empty() {
        sql.push('*');
    } else {
        // grouped columns first, then aggregate calls
        let items: Vec<String> = group
            .columns
            .iter()
            .cloned()
            .chain(group.aggregates.iter().map(ToString::to_string))
            .collect();
        sql.push_str(&items.join(", "));
    }

    sql.push_str(" FROM ");
    sql.push_str(&table);

    if joins::mentioned(text) {
        // a join we can't pin down is dropped, not an error
        if let Ok(join) = joins::extract(text) {
            sql.push(' ');
            sql.push_str(&join.to_string());
        }
    }

    if let Some(pred) = predicate::extract(text) {
        sql.push_str(" WHERE ");
        sql.push_str(&pred.to_string());
    }

    if !group.columns.is_empty() {
        sql.push_str(" GROUP BY ");
        sql.push_str(&group.columns.join(", "));
    }

    let order_keys = ordering::extract(text);
    if !order_keys.is_empty() {
        let keys: Vec<String> = order_keys.iter().map(ToString::to_string).collect();
        sql.push_str(" ORDER BY ");
        sql.push_str(&keys.join(", "));
    }

    sql.push(';');
    Ok(sql)
}
