//! Classification and phrase-pattern extraction over normalized text.
//!
//! The classifier picks the operation; each submodule then scans the same
//! lowercased text for one clause shape and returns a structured fragment or
//! nothing. All matching is deliberately permissive substring or unanchored
//! regex scanning, and the heuristics depend on first-match, declaration-order
//! behavior.

pub mod columns;
pub mod grouping;
pub mod joins;
pub mod ordering;
pub mod predicate;
pub mod table;
pub mod values;

#[cfg(test)]
mod tests;

use crate::ast::ParsedRequest;
use crate::error::{TranslateError, TranslateResult};
use crate::lexicon;

/// Classify a raw request into an operation plus the normalized text the
/// extractors will scan.
///
/// Categories are tried in declaration order and the first category with any
/// trigger word occurring as a substring wins. A request containing both
/// "show" and "remove" therefore classifies as select, and "newest" trips
/// the create trigger "new" no matter what else the text says.
pub fn classify(input: &str) -> TranslateResult<ParsedRequest> {
    let text = normalize(input);
    let operation = lexicon::OPERATION_TRIGGERS
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|t| text.contains(*t)))
        .map(|(operation, _)| *operation)
        .ok_or(TranslateError::UnrecognizedOperation)?;
    Ok(ParsedRequest { operation, text })
}

/// Lowercase and trim. Every extractor runs over this form, never the raw
/// input, so casing can't change what matches.
fn normalize(input: &str) -> String {
    input.to_lowercase().trim().to_string()
}
