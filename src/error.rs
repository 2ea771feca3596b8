use thiserror::Error;

use crate::column::ColumnType;

/// Crate-wide result alias.
pub type Result<T, E = SargError> = std::result::Result<T, E>;

/// Errors raised while building or evaluating search arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SargError {
    /// A predicate references a column the decoded row does not carry.
    #[error("column {column} is referenced by the predicate but missing from the row")]
    ColumnNotInRow {
        /// Column number that could not be resolved.
        column: usize,
    },
    /// A fixed-width integer field holds fewer bytes than its type requires.
    #[error("field for column {column} holds {actual} bytes, {expected} required")]
    FieldTooShort {
        /// Column number of the short field.
        column: usize,
        /// Width demanded by the column type.
        expected: usize,
        /// Bytes actually present.
        actual: usize,
    },
    /// The column type has no comparison rule and the policy asks to fail.
    #[error("column {column} has type {column_type} which cannot be evaluated")]
    UnsupportedColumnType {
        /// Column number under test.
        column: usize,
        /// Declared type of the column.
        column_type: ColumnType,
    },
    /// A literal does not fit the column it is compared against.
    #[error("literal {literal} does not fit column {column} of type {column_type}")]
    LiteralMismatch {
        /// Column number under test.
        column: usize,
        /// Declared type of the column.
        column_type: ColumnType,
        /// Kind of the offending literal.
        literal: &'static str,
    },
    /// No column with the requested name exists on the table.
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    /// A raw column type code outside the Jet enumeration.
    #[error("unknown column type code: {0:#04x}")]
    UnknownColumnType(u8),
    /// A builder group finished without any clause.
    #[error("sarg builder requires at least one clause")]
    EmptyClauseList,
    /// A leaf builder was given more than one clause.
    #[error("sarg leaf builder must contain exactly one clause, got {0}")]
    MultipleLeafClauses(usize),
}
