use std::sync::Arc;

use crate::{
    column::{Column, TextEncoding},
    sarg::{find_indexable_sargs, ColumnSargs, SargNode},
};

/// A table definition together with the sarg tree filtering its rows.
#[derive(Clone, Debug)]
pub struct Table {
    name: Arc<str>,
    columns: Vec<Column>,
    text_encoding: TextEncoding,
    sarg_tree: Option<SargNode>,
}

impl Table {
    /// Creates a table without a sarg tree.
    #[must_use]
    pub fn new<N>(name: N, columns: Vec<Column>, text_encoding: TextEncoding) -> Self
    where
        N: Into<Arc<str>>,
    {
        Self {
            name: name.into(),
            columns,
            text_encoding,
            sarg_tree: None,
        }
    }

    /// Installs the tree rows are tested against.
    #[must_use]
    pub fn with_sarg_tree(self, sarg_tree: SargNode) -> Self {
        Table {
            sarg_tree: Some(sarg_tree),
            ..self
        }
    }

    /// Table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column definitions.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Finds a column by name, ignoring ASCII case.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.name().eq_ignore_ascii_case(name))
    }

    /// How text columns of the table are stored.
    #[must_use]
    pub fn text_encoding(&self) -> TextEncoding {
        self.text_encoding
    }

    /// The tree rows are tested against, if any.
    #[must_use]
    pub fn sarg_tree(&self) -> Option<&SargNode> {
        self.sarg_tree.as_ref()
    }

    /// Collects the candidate index sargs of the table's tree.
    #[must_use]
    pub fn indexable_sargs(&self) -> ColumnSargs {
        let mut out = ColumnSargs::new();
        if let Some(root) = &self.sarg_tree {
            find_indexable_sargs(root, &mut out);
        }
        out
    }
}
