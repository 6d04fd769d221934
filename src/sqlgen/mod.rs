//! SQL statement assembly.
//!
//! One builder per statement kind. Each runs its clause extractors in a fixed
//! order over the normalized text and joins the fragments into a single
//! `;`-terminated statement.

pub mod create;
pub mod delete;
pub mod insert;
pub mod select;
pub mod update;


use crate::ast::{OperationKind, ParsedRequest};
use crate::error::{TranslateError, TranslateResult};

/// Build the statement for a classified request.
pub fn build_statement(request: &ParsedRequest) -> TranslateResult<String> {
    match request.operation {
        OperationKind::Create => create::build_create(&request.text),
        OperationKind::Select => select::build_select(&request.text),
        OperationKind::Insert => insert::build_insert(&request.text),
        OperationKind::Update => update::build_update(&request.text),
        OperationKind::Delete => delete::build_delete(&request.text),
        // join, group and order classify but have no statement of their own;
        // they only produce SQL riding along on a SELECT
        other => Err(TranslateError::UnsupportedOperation(other)),
    }
}
