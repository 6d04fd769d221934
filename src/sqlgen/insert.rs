//! INSERT assembly.

use crate::error::TranslateResult;
use crate::parser::{table, values};

/// Build `INSERT INTO …;`.
///
/// With explicit "columns … values …" lists both are emitted verbatim and
/// unquoted; without them a generic VALUES placeholder stands in.
pub fn build_insert(text: &str) -> TranslateResult<String> {
    let table = table::insert_target(text)?;

    match values::insert_lists(text) {
        Some(lists) => Ok(format!(
            "INSERT INTO {table} ({}) VALUES ({});",
            lists.columns.join(", "),
            lists.values.join(", ")
        )),
        None => Ok(format!("INSERT INTO {table} VALUES (value1, value2, ...);")),
    }
}
