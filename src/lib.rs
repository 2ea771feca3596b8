#![deny(missing_docs)]
//! Search-argument (sarg) evaluation for Jet/Access tables.
//!
//! A sarg tree is a binary WHERE-clause expression over relational leaves
//! (`column op literal`) joined by `AND`, `OR` and `NOT`. The crate tests such
//! trees against rows whose fields were decoded elsewhere, and mines them for
//! the conjuncts an index scan could use. Page traversal and row decoding are
//! left to the caller.

mod codec;
mod column;
mod error;
mod eval;
mod like;
mod metrics;
mod observability;
mod option;
mod sarg;
mod table;

pub use codec::{decode_le_int, JetTextDecoder, TextDecoder};
pub use column::{locate_field, Column, ColumnType, Field, TextEncoding};
pub use error::{Result, SargError};
pub use eval::{compare_int, compare_text, SargEngine, TEXT_COMPARE_LIMIT};
pub use like::{LikeMatcher, WildcardMatcher};
pub use metrics::SargMetricsSnapshot;
pub use option::{SargOptions, UnsupportedTypePolicy};
pub use sarg::{
    find_indexable_sargs, walk, ColumnSargs, RelationalSarg, Sarg, SargBuilder, SargNode,
    SargOp, SargValue, WalkControl,
};
pub use table::Table;
