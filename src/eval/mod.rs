//! Row-level evaluation of sarg trees.

mod compare;

use std::sync::Arc;

pub use compare::{compare_int, compare_text, TEXT_COMPARE_LIMIT};

use crate::{
    codec::{decode_le_int, JetTextDecoder, TextDecoder},
    column::{locate_field, Column, Field, TextEncoding},
    error::{Result, SargError},
    like::{LikeMatcher, WildcardMatcher},
    metrics::{SargMetrics, SargMetricsSnapshot},
    observability::log_warn,
    option::{SargOptions, UnsupportedTypePolicy},
    sarg::{Sarg, SargNode, SargOp, SargValue},
    table::Table,
};

/// Evaluates sarg trees against decoded rows.
///
/// The engine holds no per-row state and may be shared across threads; its
/// diagnostic counters are atomic.
pub struct SargEngine {
    options: SargOptions,
    text_decoder: Arc<dyn TextDecoder>,
    wildcard: Arc<dyn WildcardMatcher>,
    metrics: SargMetrics,
}

impl Default for SargEngine {
    fn default() -> Self {
        Self::new(SargOptions::default())
    }
}

impl std::fmt::Debug for SargEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SargEngine")
            .field("options", &self.options)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl SargEngine {
    /// Creates an engine with the Jet text decoder and the default `LIKE` matcher.
    #[must_use]
    pub fn new(options: SargOptions) -> Self {
        Self {
            options,
            text_decoder: Arc::new(JetTextDecoder),
            wildcard: Arc::new(LikeMatcher),
            metrics: SargMetrics::default(),
        }
    }

    /// Replaces the decoder used for extended-encoding text columns.
    #[must_use]
    pub fn with_text_decoder(self, text_decoder: Arc<dyn TextDecoder>) -> Self {
        SargEngine {
            text_decoder,
            ..self
        }
    }

    /// Replaces the matcher backing the `LIKE` operator.
    #[must_use]
    pub fn with_wildcard_matcher(self, wildcard: Arc<dyn WildcardMatcher>) -> Self {
        SargEngine { wildcard, ..self }
    }

    /// Diagnostics recorded so far.
    #[must_use]
    pub fn metrics(&self) -> SargMetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Returns whether the row satisfies the table's sarg tree.
    ///
    /// A table without a tree matches every row.
    pub fn matches(&self, table: &Table, fields: &[Field<'_>]) -> Result<bool> {
        match table.sarg_tree() {
            None => Ok(true),
            Some(root) => self.test_node(table.text_encoding(), root, fields),
        }
    }

    /// Evaluates `node` against one row.
    ///
    /// `AND` skips its right side once the left is false, `OR` once the left
    /// is true.
    pub fn test_node(
        &self,
        encoding: TextEncoding,
        node: &SargNode,
        fields: &[Field<'_>],
    ) -> Result<bool> {
        match node {
            SargNode::Relational(leaf) => {
                let column = leaf.column();
                let elem = locate_field(column.number(), fields).ok_or(
                    SargError::ColumnNotInRow {
                        column: column.number(),
                    },
                )?;
                self.test_sarg(encoding, column, leaf.sarg(), fields[elem].value())
            }
            SargNode::Not(child) => Ok(!self.test_node(encoding, child, fields)?),
            SargNode::And(left, right) => {
                if !self.test_node(encoding, left, fields)? {
                    return Ok(false);
                }
                self.test_node(encoding, right, fields)
            }
            SargNode::Or(left, right) => {
                if self.test_node(encoding, left, fields)? {
                    return Ok(true);
                }
                self.test_node(encoding, right, fields)
            }
        }
    }

    /// Tests one sarg against the raw bytes stored for `column`.
    pub fn test_sarg(
        &self,
        encoding: TextEncoding,
        column: &Column,
        sarg: &Sarg,
        value: &[u8],
    ) -> Result<bool> {
        let column_type = column.column_type();
        if !column_type.is_sargable() {
            log_warn!(
                component = "eval",
                event = "unsupported_column_type",
                column = column.number(),
                column_type = %column_type,
                policy = ?self.options.unsupported_type,
            );
            self.metrics.record_unsupported_type();
            return match self.options.unsupported_type {
                UnsupportedTypePolicy::Match => Ok(true),
                UnsupportedTypePolicy::Reject => Ok(false),
                UnsupportedTypePolicy::Fail => Err(SargError::UnsupportedColumnType {
                    column: column.number(),
                    column_type,
                }),
            };
        }

        match (&sarg.value, column_type.is_text()) {
            (SargValue::Int(literal), false) => {
                let observed = decode_le_int(column, value)?.unwrap_or_default();
                Ok(self.compare_int(sarg.op, *literal, observed))
            }
            (SargValue::Text(literal), true) => {
                let observed = match encoding {
                    TextEncoding::Extended => self.text_decoder.decode(value),
                    TextEncoding::Narrow => compare::bounded(value).to_vec(),
                };
                Ok(self.compare_text(sarg.op, literal.as_bytes(), &observed))
            }
            (literal, _) => Err(SargError::LiteralMismatch {
                column: column.number(),
                column_type,
                literal: literal.kind_name(),
            }),
        }
    }

    /// Tests every candidate sarg of one column against a raw value.
    ///
    /// Stops at the first sarg that does not match.
    pub fn test_sargs(
        &self,
        encoding: TextEncoding,
        column: &Column,
        sargs: &[Sarg],
        value: &[u8],
    ) -> Result<bool> {
        for sarg in sargs {
            if !self.test_sarg(encoding, column, sarg, value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Integer comparison; operators without integer meaning never match.
    #[must_use]
    pub fn compare_int(&self, op: SargOp, literal: i32, observed: i32) -> bool {
        compare_int(op, literal, observed).unwrap_or_else(|| self.unsupported_operator(op, "int"))
    }

    /// Text comparison through the engine's wildcard matcher.
    #[must_use]
    pub fn compare_text(&self, op: SargOp, literal: &[u8], observed: &[u8]) -> bool {
        compare_text(op, literal, observed, self.wildcard.as_ref())
            .unwrap_or_else(|| self.unsupported_operator(op, "text"))
    }

    fn unsupported_operator(&self, op: SargOp, domain: &'static str) -> bool {
        log_warn!(
            component = "compare",
            event = "unsupported_operator",
            op = %op,
            domain,
        );
        self.metrics.record_unsupported_operator();
        false
    }
}
