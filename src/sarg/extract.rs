//! Mining sarg trees for conjuncts an index scan can use.

use std::collections::{btree_map, BTreeMap};

use super::{walk, Sarg, SargNode, WalkControl};
use crate::{
    column::Column,
    error::{Result, SargError},
    observability::log_debug,
};

/// Candidate sargs collected per column number.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnSargs {
    by_column: BTreeMap<usize, Vec<Sarg>>,
}

impl ColumnSargs {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `sarg` to the candidates of `column`.
    pub fn add(&mut self, column: &Column, sarg: Sarg) {
        self.by_column
            .entry(column.number())
            .or_default()
            .push(sarg);
    }

    /// Appends `sarg` to the column whose name matches `name`, ignoring ASCII case.
    pub fn add_by_name(&mut self, columns: &[Column], name: &str, sarg: Sarg) -> Result<()> {
        let column = columns
            .iter()
            .find(|column| column.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SargError::UnknownColumn(name.to_owned()))?;
        sarg.value.check_fits(column)?;
        self.add(column, sarg);
        Ok(())
    }

    /// Candidates collected for `column_number`, in discovery order.
    #[must_use]
    pub fn sargs(&self, column_number: usize) -> &[Sarg] {
        self.by_column
            .get(&column_number)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates columns that have at least one candidate, by column number.
    pub fn iter(&self) -> btree_map::Iter<'_, usize, Vec<Sarg>> {
        self.by_column.iter()
    }

    /// Total number of candidates across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_column.values().map(Vec::len).sum()
    }

    /// Returns true when no candidate has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_column.is_empty()
    }
}

/// Collects relational leaves reachable from `root` through `AND` nodes only.
///
/// `OR` and `NOT` subtrees are not mined: OR'd terms would need range merging
/// to drive an index, and negations rarely narrow a scan.
pub fn find_indexable_sargs(root: &SargNode, out: &mut ColumnSargs) {
    walk(root, |node| match node {
        SargNode::Or(..) | SargNode::Not(_) => WalkControl::Stop,
        SargNode::Relational(leaf) => {
            log_debug!(
                component = "extract",
                event = "sarg_collected",
                column = leaf.column().number(),
                op = %leaf.op(),
            );
            out.add(leaf.column(), leaf.sarg().clone());
            WalkControl::Stop
        }
        SargNode::And(..) => WalkControl::Continue,
    });
}
