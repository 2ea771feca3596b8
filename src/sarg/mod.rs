//! Search-argument trees and the candidate sargs mined from them.

mod builder;
mod extract;
mod walk;

use std::fmt;

pub use builder::SargBuilder;
pub use extract::{find_indexable_sargs, ColumnSargs};
pub use walk::{walk, WalkControl};

use crate::{
    column::{Column, ColumnType},
    error::{Result, SargError},
};

/// Relational operator applied by a sarg leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SargOp {
    /// Equals (`=`).
    Equal,
    /// Greater than (`>`).
    GreaterThan,
    /// Less than (`<`).
    LessThan,
    /// Greater than or equal to (`>=`).
    GreaterThanOrEqual,
    /// Less than or equal to (`<=`).
    LessThanOrEqual,
    /// Wildcard match (`LIKE`).
    Like,
}

impl SargOp {
    /// Returns a textual representation of the operator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SargOp::Equal => "=",
            SargOp::GreaterThan => ">",
            SargOp::LessThan => "<",
            SargOp::GreaterThanOrEqual => ">=",
            SargOp::LessThanOrEqual => "<=",
            SargOp::Like => "LIKE",
        }
    }

    /// Tests `observed.cmp(literal)` against the operator.
    ///
    /// Returns `None` for operators that are not ordering based.
    #[must_use]
    pub fn test_ordering(self, ordering: std::cmp::Ordering) -> Option<bool> {
        use std::cmp::Ordering;
        match self {
            SargOp::Equal => Some(ordering == Ordering::Equal),
            SargOp::GreaterThan => Some(ordering == Ordering::Greater),
            SargOp::LessThan => Some(ordering == Ordering::Less),
            SargOp::GreaterThanOrEqual => Some(ordering != Ordering::Less),
            SargOp::LessThanOrEqual => Some(ordering != Ordering::Greater),
            SargOp::Like => None,
        }
    }
}

impl fmt::Display for SargOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal a sarg compares column values against.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SargValue {
    /// Integer literal for byte, int and longint columns.
    Int(i32),
    /// Text literal for text columns.
    Text(String),
}

impl SargValue {
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            SargValue::Int(_) => "int",
            SargValue::Text(_) => "text",
        }
    }

    /// Returns true when the literal can be compared against `column_type`.
    ///
    /// Types without a comparison rule accept either literal; evaluation
    /// applies the unsupported-type policy to them instead.
    #[must_use]
    pub fn fits(&self, column_type: ColumnType) -> bool {
        match self {
            SargValue::Int(_) => column_type.int_width().is_some() || !column_type.is_sargable(),
            SargValue::Text(_) => column_type.is_text() || !column_type.is_sargable(),
        }
    }

    pub(crate) fn check_fits(&self, column: &Column) -> Result<()> {
        if self.fits(column.column_type()) {
            Ok(())
        } else {
            Err(SargError::LiteralMismatch {
                column: column.number(),
                column_type: column.column_type(),
                literal: self.kind_name(),
            })
        }
    }
}

impl From<i32> for SargValue {
    fn from(value: i32) -> Self {
        SargValue::Int(value)
    }
}

impl From<&str> for SargValue {
    fn from(value: &str) -> Self {
        SargValue::Text(value.to_owned())
    }
}

impl From<String> for SargValue {
    fn from(value: String) -> Self {
        SargValue::Text(value)
    }
}

impl fmt::Display for SargValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SargValue::Int(value) => write!(f, "{value}"),
            SargValue::Text(value) => write!(f, "'{value}'"),
        }
    }
}

/// Candidate index predicate detached from the tree it was found in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sarg {
    /// Operator to apply.
    pub op: SargOp,
    /// Literal operand.
    pub value: SargValue,
}

impl Sarg {
    /// Creates a sarg from an operator and literal.
    #[must_use]
    pub fn new<V>(op: SargOp, value: V) -> Self
    where
        V: Into<SargValue>,
    {
        Self {
            op,
            value: value.into(),
        }
    }
}

/// Relational leaf: `column op literal`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationalSarg {
    column: Column,
    sarg: Sarg,
}

impl RelationalSarg {
    /// Column under test.
    #[must_use]
    pub fn column(&self) -> &Column {
        &self.column
    }

    /// Operator and literal of the leaf.
    #[must_use]
    pub fn sarg(&self) -> &Sarg {
        &self.sarg
    }

    /// Operator of the leaf.
    #[must_use]
    pub fn op(&self) -> SargOp {
        self.sarg.op
    }

    /// Literal of the leaf.
    #[must_use]
    pub fn value(&self) -> &SargValue {
        &self.sarg.value
    }
}

/// Node of a sarg tree. Arity follows from the variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SargNode {
    /// Relational leaf.
    Relational(RelationalSarg),
    /// Logical negation of the single child.
    Not(Box<SargNode>),
    /// Conjunction of left and right.
    And(Box<SargNode>, Box<SargNode>),
    /// Disjunction of left and right.
    Or(Box<SargNode>, Box<SargNode>),
}

impl SargNode {
    /// Builds a relational leaf, checking the literal against the column type.
    pub fn compare<V>(column: Column, op: SargOp, value: V) -> Result<Self>
    where
        V: Into<SargValue>,
    {
        let sarg = Sarg::new(op, value);
        sarg.value.check_fits(&column)?;
        Ok(SargNode::Relational(RelationalSarg { column, sarg }))
    }

    /// Builds `left AND right`.
    #[must_use]
    pub fn and(left: SargNode, right: SargNode) -> Self {
        SargNode::And(Box::new(left), Box::new(right))
    }

    /// Builds `left OR right`.
    #[must_use]
    pub fn or(left: SargNode, right: SargNode) -> Self {
        SargNode::Or(Box::new(left), Box::new(right))
    }

    /// Builds `NOT child`.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(child: SargNode) -> Self {
        SargNode::Not(Box::new(child))
    }

    /// Returns true for relational leaves.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, SargNode::Relational(_))
    }

    /// First child: the operand of `Not`, or the left side of `And`/`Or`.
    #[must_use]
    pub fn left(&self) -> Option<&SargNode> {
        match self {
            SargNode::Relational(_) => None,
            SargNode::Not(child) => Some(child),
            SargNode::And(left, _) | SargNode::Or(left, _) => Some(left),
        }
    }

    /// Right side of `And`/`Or`.
    #[must_use]
    pub fn right(&self) -> Option<&SargNode> {
        match self {
            SargNode::Relational(_) | SargNode::Not(_) => None,
            SargNode::And(_, right) | SargNode::Or(_, right) => Some(right),
        }
    }
}

impl fmt::Display for SargNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SargNode::Relational(leaf) => write!(
                f,
                "{} {} {}",
                leaf.column.name(),
                leaf.sarg.op,
                leaf.sarg.value
            ),
            SargNode::Not(child) => write!(f, "NOT ({child})"),
            SargNode::And(left, right) => write!(f, "({left} AND {right})"),
            SargNode::Or(left, right) => write!(f, "({left} OR {right})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    fn int_column() -> Column {
        Column::new(0, "id", ColumnType::LongInt)
    }

    fn text_column() -> Column {
        Column::new(1, "name", ColumnType::Text)
    }

    #[test]
    fn test_ordering_matches_operator() {
        let cases = [
            (SargOp::Equal, [false, true, false]),
            (SargOp::GreaterThan, [false, false, true]),
            (SargOp::LessThan, [true, false, false]),
            (SargOp::GreaterThanOrEqual, [false, true, true]),
            (SargOp::LessThanOrEqual, [true, true, false]),
        ];
        for (op, expected) in cases {
            let got = [Ordering::Less, Ordering::Equal, Ordering::Greater]
                .map(|ordering| op.test_ordering(ordering).expect("ordering op"));
            assert_eq!(got, expected, "operator {op}");
        }
        assert_eq!(SargOp::Like.test_ordering(Ordering::Equal), None);
    }

    #[test]
    fn compare_rejects_mismatched_literal() {
        let err = SargNode::compare(int_column(), SargOp::Equal, "abc").unwrap_err();
        assert_eq!(
            err,
            SargError::LiteralMismatch {
                column: 0,
                column_type: ColumnType::LongInt,
                literal: "text",
            }
        );
        assert!(SargNode::compare(text_column(), SargOp::Equal, 5).is_err());
        assert!(SargNode::compare(text_column(), SargOp::Like, "a%").is_ok());
    }

    #[test]
    fn unsargable_columns_accept_any_literal() {
        let column = Column::new(2, "price", ColumnType::Double);
        assert!(SargNode::compare(column.clone(), SargOp::Equal, 3).is_ok());
        assert!(SargNode::compare(column, SargOp::Equal, "3").is_ok());
    }

    #[test]
    fn children_follow_arity() {
        let leaf = SargNode::compare(int_column(), SargOp::Equal, 1).expect("leaf");
        assert!(leaf.is_leaf());
        assert!(leaf.left().is_none() && leaf.right().is_none());

        let not = SargNode::not(leaf.clone());
        assert_eq!(not.left(), Some(&leaf));
        assert!(not.right().is_none());

        let other = SargNode::compare(text_column(), SargOp::Like, "x%").expect("leaf");
        let and = SargNode::and(leaf.clone(), other.clone());
        assert_eq!(and.left(), Some(&leaf));
        assert_eq!(and.right(), Some(&other));
    }

    #[test]
    fn display_renders_infix() {
        let tree = SargNode::or(
            SargNode::compare(int_column(), SargOp::GreaterThanOrEqual, 10).expect("leaf"),
            SargNode::not(SargNode::compare(text_column(), SargOp::Equal, "bob").expect("leaf")),
        );
        assert_eq!(tree.to_string(), "(id >= 10 OR NOT (name = 'bob'))");
    }
}
