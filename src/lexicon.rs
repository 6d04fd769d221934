//! Static vocabularies: trigger words, type keywords, aggregate and join
//! tables.
//!
//! Declaration order is load-bearing. The classifier and the type inference
//! walk these tables front to back and the first hit wins, so reordering an
//! entry changes which operation or type ambiguous text resolves to.

use crate::ast::{AggregateFunc, JoinKind, OperationKind};

/// Operation categories with their trigger words, in tie-break order.
pub const OPERATION_TRIGGERS: &[(OperationKind, &[&str])] = &[
    (OperationKind::Create, &["create", "make", "new", "setup"]),
    (
        OperationKind::Select,
        &["show", "display", "get", "find", "select", "list"],
    ),
    (OperationKind::Insert, &["add", "insert", "put"]),
    (OperationKind::Update, &["update", "modify", "change"]),
    (OperationKind::Delete, &["delete", "remove", "drop"]),
    (OperationKind::Join, &["join", "combine", "merge"]),
    (OperationKind::Group, &["group", "aggregate", "summarize"]),
    (OperationKind::Order, &["order", "sort", "arrange"]),
];

/// Column-name keywords and the storage type they imply.
pub const TYPE_KEYWORDS: &[(&str, &str)] = &[
    ("text", "VARCHAR(255)"),
    ("string", "VARCHAR(255)"),
    ("number", "INT"),
    ("integer", "INT"),
    ("decimal", "DECIMAL(10,2)"),
    ("date", "DATE"),
    ("email", "VARCHAR(255)"),
    ("phone", "VARCHAR(20)"),
];

/// Storage type used when no keyword matches.
pub const DEFAULT_SQL_TYPE: &str = "VARCHAR(255)";

/// Aggregate trigger words, in the order their hits are emitted.
pub const AGGREGATE_TRIGGERS: &[(&str, AggregateFunc)] = &[
    ("count", AggregateFunc::Count),
    ("sum", AggregateFunc::Sum),
    ("average", AggregateFunc::Avg),
    ("minimum", AggregateFunc::Min),
    ("maximum", AggregateFunc::Max),
];

/// Join flavor trigger words. INNER doubles as the default.
pub const JOIN_TRIGGERS: &[(&str, JoinKind)] = &[
    ("inner", JoinKind::Inner),
    ("left", JoinKind::Left),
    ("right", JoinKind::Right),
    ("outer", JoinKind::Outer),
];

/// Tokens never accepted as CREATE column names.
pub const COLUMN_STOP_WORDS: &[&str] = &["table", "with", "and"];

/// Trigger words for one operation category.
pub fn triggers_for(kind: OperationKind) -> &'static [&'static str] {
    OPERATION_TRIGGERS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

/// Infer a storage type from a column token. Substring match, table order,
/// so "phone number" resolves through "number" before "phone" is reached.
pub fn infer_sql_type(token: &str) -> &'static str {
    TYPE_KEYWORDS
        .iter()
        .find(|(keyword, _)| token.contains(*keyword))
        .map(|(_, sql_type)| *sql_type)
        .unwrap_or(DEFAULT_SQL_TYPE)
}

/// Pick the join flavor mentioned in the text, defaulting to INNER.
pub fn join_kind_in(text: &str) -> JoinKind {
    JOIN_TRIGGERS
        .iter()
        .find(|(keyword, _)| text.contains(*keyword))
        .map(|(_, kind)| *kind)
        .unwrap_or(JoinKind::Inner)
}
