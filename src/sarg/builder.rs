//! Builder for composing sarg trees.

use super::{SargNode, SargOp, SargValue};
use crate::{
    column::Column,
    error::{Result, SargError},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BuilderCombine {
    Leaf,
    Conjunction,
    Disjunction,
    Negation,
}

/// Builder for composing sarg trees incrementally.
///
/// Groups with several clauses fold left into binary nodes, so
/// `and().equals(a).equals(b).equals(c)` yields `((a AND b) AND c)`.
#[derive(Debug)]
pub struct SargBuilder {
    combine: BuilderCombine,
    clauses: Vec<SargNode>,
    error: Option<SargError>,
}

impl SargBuilder {
    const fn new(combine: BuilderCombine) -> Self {
        Self {
            combine,
            clauses: Vec::new(),
            error: None,
        }
    }

    /// Creates a builder that expects a single clause.
    #[must_use]
    pub fn leaf() -> Self {
        Self::new(BuilderCombine::Leaf)
    }

    /// Creates a builder that emits an `AND` of all clauses.
    #[must_use]
    pub fn and() -> Self {
        Self::new(BuilderCombine::Conjunction)
    }

    /// Creates a builder that emits an `OR` of all clauses.
    #[must_use]
    pub fn or() -> Self {
        Self::new(BuilderCombine::Disjunction)
    }

    /// Adds an existing tree to the builder.
    #[must_use]
    pub fn node(mut self, node: SargNode) -> Self {
        self.clauses.push(node);
        self
    }

    /// Adds a relational clause.
    #[must_use]
    pub fn compare<V>(mut self, column: &Column, op: SargOp, value: V) -> Self
    where
        V: Into<SargValue>,
    {
        match SargNode::compare(column.clone(), op, value) {
            Ok(node) => self.clauses.push(node),
            Err(err) => {
                self.error.get_or_insert(err);
            }
        }
        self
    }

    /// Adds an equality clause.
    #[must_use]
    pub fn equals<V>(self, column: &Column, value: V) -> Self
    where
        V: Into<SargValue>,
    {
        self.compare(column, SargOp::Equal, value)
    }

    /// Adds a `<` clause.
    #[must_use]
    pub fn less_than<V>(self, column: &Column, value: V) -> Self
    where
        V: Into<SargValue>,
    {
        self.compare(column, SargOp::LessThan, value)
    }

    /// Adds a `<=` clause.
    #[must_use]
    pub fn less_than_or_equal<V>(self, column: &Column, value: V) -> Self
    where
        V: Into<SargValue>,
    {
        self.compare(column, SargOp::LessThanOrEqual, value)
    }

    /// Adds a `>` clause.
    #[must_use]
    pub fn greater_than<V>(self, column: &Column, value: V) -> Self
    where
        V: Into<SargValue>,
    {
        self.compare(column, SargOp::GreaterThan, value)
    }

    /// Adds a `>=` clause.
    #[must_use]
    pub fn greater_than_or_equal<V>(self, column: &Column, value: V) -> Self
    where
        V: Into<SargValue>,
    {
        self.compare(column, SargOp::GreaterThanOrEqual, value)
    }

    /// Adds a `LIKE` clause.
    #[must_use]
    pub fn like<P>(self, column: &Column, pattern: P) -> Self
    where
        P: Into<String>,
    {
        self.compare(column, SargOp::Like, SargValue::Text(pattern.into()))
    }

    fn branch<F>(mut self, combine: BuilderCombine, build: F) -> Self
    where
        F: FnOnce(SargBuilder) -> SargBuilder,
    {
        match build(SargBuilder::new(combine)).build() {
            Ok(node) => self.clauses.push(node),
            Err(err) => {
                self.error.get_or_insert(err);
            }
        }
        self
    }

    /// Adds a nested conjunction built by the supplied closure.
    #[must_use]
    pub fn and_group<F>(self, build: F) -> Self
    where
        F: FnOnce(SargBuilder) -> SargBuilder,
    {
        self.branch(BuilderCombine::Conjunction, build)
    }

    /// Adds a nested disjunction built by the supplied closure.
    #[must_use]
    pub fn or_group<F>(self, build: F) -> Self
    where
        F: FnOnce(SargBuilder) -> SargBuilder,
    {
        self.branch(BuilderCombine::Disjunction, build)
    }

    /// Adds the negation of a single clause built by the supplied closure.
    #[must_use]
    pub fn not_group<F>(self, build: F) -> Self
    where
        F: FnOnce(SargBuilder) -> SargBuilder,
    {
        self.branch(BuilderCombine::Negation, build)
    }

    /// Consumes the builder and returns the composed tree.
    ///
    /// The first invalid clause, if any, is reported instead.
    pub fn build(self) -> Result<SargNode> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let mut clauses = self.clauses.into_iter();
        let first = clauses.next().ok_or(SargError::EmptyClauseList)?;
        match self.combine {
            BuilderCombine::Leaf | BuilderCombine::Negation => {
                let extra = clauses.len();
                if extra > 0 {
                    return Err(SargError::MultipleLeafClauses(extra + 1));
                }
                if self.combine == BuilderCombine::Negation {
                    Ok(SargNode::not(first))
                } else {
                    Ok(first)
                }
            }
            BuilderCombine::Conjunction => Ok(clauses.fold(first, SargNode::and)),
            BuilderCombine::Disjunction => Ok(clauses.fold(first, SargNode::or)),
        }
    }
}

impl Default for SargBuilder {
    fn default() -> Self {
        Self::leaf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnType;

    fn id() -> Column {
        Column::new(0, "id", ColumnType::LongInt)
    }

    fn name() -> Column {
        Column::new(1, "name", ColumnType::Text)
    }

    #[test]
    fn leaf_builder_requires_clause() {
        assert_eq!(
            SargBuilder::leaf().build().unwrap_err(),
            SargError::EmptyClauseList
        );
        assert_eq!(
            SargBuilder::and().build().unwrap_err(),
            SargError::EmptyClauseList
        );
        assert_eq!(
            SargBuilder::or().build().unwrap_err(),
            SargError::EmptyClauseList
        );
    }

    #[test]
    fn leaf_builder_rejects_multiple_clauses() {
        let err = SargBuilder::leaf()
            .equals(&id(), 1)
            .equals(&id(), 2)
            .build()
            .unwrap_err();
        assert_eq!(err, SargError::MultipleLeafClauses(2));
    }

    #[test]
    fn groups_fold_left_into_binary_nodes() {
        let built = SargBuilder::and()
            .equals(&id(), 1)
            .greater_than(&id(), 0)
            .like(&name(), "a%")
            .build()
            .expect("valid tree");
        let expected = SargNode::and(
            SargNode::and(
                SargNode::compare(id(), SargOp::Equal, 1).expect("leaf"),
                SargNode::compare(id(), SargOp::GreaterThan, 0).expect("leaf"),
            ),
            SargNode::compare(name(), SargOp::Like, "a%").expect("leaf"),
        );
        assert_eq!(built, expected);
    }

    #[test]
    fn nested_groups() {
        let built = SargBuilder::and()
            .less_than_or_equal(&id(), 100)
            .or_group(|group| group.equals(&name(), "x").equals(&name(), "y"))
            .not_group(|group| group.greater_than_or_equal(&id(), 50))
            .build()
            .expect("valid tree");
        assert_eq!(
            built.to_string(),
            "((id <= 100 AND (name = 'x' OR name = 'y')) AND NOT (id >= 50))"
        );
    }

    #[test]
    fn invalid_clause_is_reported_on_build() {
        let err = SargBuilder::or()
            .equals(&id(), 1)
            .and_group(|group| group.less_than(&name(), 3))
            .build()
            .unwrap_err();
        assert!(matches!(err, SargError::LiteralMismatch { column: 1, .. }));
    }
}
