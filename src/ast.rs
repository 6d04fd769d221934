//! Value structures produced by the clause extractors.
//!
//! Everything here is transient: built for one translation, consumed by one
//! statement builder, then dropped. The `Display` impls render the exact SQL
//! fragment each value contributes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The statement kind a request resolves to.
///
/// The last three classify but have no statement of their own: a join, group
/// or order phrase only produces SQL when it rides along on a SELECT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Create,
    Select,
    Insert,
    Update,
    Delete,
    Join,
    Group,
    Order,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperationKind::Create => "CREATE",
            OperationKind::Select => "SELECT",
            OperationKind::Insert => "INSERT",
            OperationKind::Update => "UPDATE",
            OperationKind::Delete => "DELETE",
            OperationKind::Join => "JOIN",
            OperationKind::Group => "GROUP",
            OperationKind::Order => "ORDER",
        };
        write!(f, "{s}")
    }
}

/// A classified request: the operation plus the normalized text every
/// extractor scans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRequest {
    pub operation: OperationKind,
    /// Lowercased, trimmed input.
    pub text: String,
}

/// A column with its inferred storage type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub sql_type: String,
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.sql_type)
    }
}

/// Join flavor keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Outer,
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Outer => "OUTER JOIN",
        };
        write!(f, "{s}")
    }
}

/// How two joined tables are matched up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JoinCondition {
    /// `using <column>` phrase.
    Using(String),
    /// `on <table>.<column> = <table>.<column>` phrase.
    On {
        left_table: String,
        left_column: String,
        right_table: String,
        right_column: String,
    },
    /// Neither phrase was found; a generic placeholder is emitted.
    Fallback,
}

impl fmt::Display for JoinCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinCondition::Using(column) => write!(f, "USING ({column})"),
            JoinCondition::On {
                left_table,
                left_column,
                right_table,
                right_column,
            } => write!(f, "ON {left_table}.{left_column} = {right_table}.{right_column}"),
            JoinCondition::Fallback => write!(f, "ON primary_key = foreign_key"),
        }
    }
}

/// A join between the base table and one other table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinSpec {
    pub kind: JoinKind,
    pub left_table: String,
    pub right_table: String,
    pub condition: JoinCondition,
}

impl fmt::Display for JoinSpec {
    /// Renders the clause as appended to a SELECT. Only the right table
    /// appears; the base FROM already names the left one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.right_table, self.condition)
    }
}

/// Aggregate functions reachable from the trigger-word vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateFunc {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl fmt::Display for AggregateFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AggregateFunc::Count => "COUNT",
            AggregateFunc::Sum => "SUM",
            AggregateFunc::Avg => "AVG",
            AggregateFunc::Min => "MIN",
            AggregateFunc::Max => "MAX",
        };
        write!(f, "{s}")
    }
}

/// An aggregate call over one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub func: AggregateFunc,
    pub column: String,
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.func, self.column)
    }
}

/// GROUP BY columns plus any aggregate calls found in the text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupSpec {
    pub columns: Vec<String>,
    pub aggregates: Vec<Aggregate>,
}

impl GroupSpec {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.aggregates.is_empty()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

/// One ORDER BY column with its direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderKey {
    pub column: String,
    pub direction: SortOrder,
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.direction)
    }
}

/// Comparison operators recognized inside a `where` phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    Gt,
    Lt,
    Like,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompareOp::Eq => "=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Like => "LIKE",
        };
        write!(f, "{s}")
    }
}

/// A single WHERE predicate. At most one is ever extracted per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub column: String,
    pub op: CompareOp,
    pub value: String,
}

impl fmt::Display for Predicate {
    /// The value is always single-quoted, numeric-looking or not.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} '{}'", self.column, self.op, self.value)
    }
}

/// One `set X to Y` assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetPair {
    pub column: String,
    pub value: String,
}

impl fmt::Display for SetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = '{}'", self.column, self.value)
    }
}

/// Explicit INSERT column and value lists.
///
/// Positional and never arity-checked against each other; values are emitted
/// verbatim, without quoting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertValues {
    pub columns: Vec<String>,
    pub values: Vec<String>,
}
