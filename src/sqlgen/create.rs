//! CREATE TABLE assembly.

use crate::error::TranslateResult;
use crate::parser::{columns, table};

/// Build `CREATE TABLE name (col TYPE, …);`.
///
/// Both the table name and at least one column are required; either missing
/// is fatal for the whole request.
pub fn build_create(text: &str) -> TranslateResult<String> {
    let table = table::create_target(text)?;
    let columns = columns::extract(text)?;

    let body = columns
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("CREATE TABLE {table} ({body});"))
}
