//! Diagnostic counters kept by a [`crate::SargEngine`].

use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of evaluation diagnostics.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SargMetricsSnapshot {
    /// Comparisons asked to apply an operator their value domain lacks.
    pub unsupported_operator: u64,
    /// Leaves evaluated against columns of a type without a comparison rule.
    pub unsupported_type: u64,
}

#[derive(Debug, Default)]
pub(crate) struct SargMetrics {
    unsupported_operator: AtomicU64,
    unsupported_type: AtomicU64,
}

impl SargMetrics {
    pub(crate) fn record_unsupported_operator(&self) {
        self.unsupported_operator.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_unsupported_type(&self) {
        self.unsupported_type.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> SargMetricsSnapshot {
        SargMetricsSnapshot {
            unsupported_operator: self.unsupported_operator.load(Ordering::Relaxed),
            unsupported_type: self.unsupported_type.load(Ordering::Relaxed),
        }
    }
}
