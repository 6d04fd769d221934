//! # plainsql — plain English in, SQL out
//!
//! A best-effort heuristic translator from informal, single-sentence
//! requests to single SQL statements. It recognizes a fixed vocabulary of
//! trigger words and a fixed set of phrase shapes; anything it can't pin
//! down degrades to a safe placeholder or an explicit `Error: …` string.
//! There is no grammar and no statistical model underneath, and the output
//! is advisory text, never executed.
//!
//! ## Quick Example
//!
//! ```rust
//! use plainsql::generate_query;
//!
//! let sql = generate_query("show all records from customers");
//! assert_eq!(sql, "SELECT * FROM customers;");
//!
//! let sql = generate_query("create a table for customers with name, email, phone");
//! assert_eq!(
//!     sql,
//!     "CREATE TABLE customers (name VARCHAR(255), email VARCHAR(255), phone VARCHAR(20));"
//! );
//! ```
//!
//! ## Statement kinds
//!
//! | Kind   | Trigger words                            | Output                      |
//! |--------|------------------------------------------|-----------------------------|
//! | CREATE | create, make, new, setup                 | `CREATE TABLE …`            |
//! | SELECT | show, display, get, find, select, list   | `SELECT …` (+ JOIN, WHERE, GROUP BY, ORDER BY) |
//! | INSERT | add, insert, put                         | `INSERT INTO …`             |
//! | UPDATE | update, modify, change                   | `UPDATE … SET …`            |
//! | DELETE | delete, remove, drop                     | `DELETE FROM …`             |
//!
//! Join, group and order words also classify, but on their own they have no
//! statement to build and come back as `Error: Unsupported operation`.

pub mod ast;
pub mod error;
pub mod lexicon;
pub mod parser;
pub mod sqlgen;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::error::*;
    pub use crate::parser::classify;
    pub use crate::sqlgen::build_statement;
    pub use crate::{generate_query, translate};
}

pub use parser::classify;

use error::TranslateResult;

/// Translate a request into a SQL statement, or a structured error.
///
/// This is the fallible layer; callers that just want a printable string
/// should use [`generate_query`].
pub fn translate(input: &str) -> TranslateResult<String> {
    let request = parser::classify(input)?;
    sqlgen::build_statement(&request)
}

/// Translate a request into a SQL statement string.
///
/// Total: every recognized failure is rendered as a string starting with
/// `"Error: "`, and the same input always yields byte-identical output.
///
/// # Example
///
/// ```
/// use plainsql::generate_query;
///
/// assert_eq!(
///     generate_query("what even is this"),
///     "Error: Could not identify the operation type"
/// );
/// ```
pub fn generate_query(input: &str) -> String {
    match translate(input) {
        Ok(sql) => sql,
        Err(err) => format!("Error: {err}"),
    }
}
