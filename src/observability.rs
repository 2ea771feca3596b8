//! Logging infrastructure for sarg evaluation.
//!
//! Events are emitted through `tracing` with target "mdbsarg" and an `event`
//! field for filtering.
//!
//! ## Library Integration
//!
//! The crate never initializes a global subscriber. Applications configure
//! tracing via `tracing_subscriber` or similar.
//!
//! ## Conventions
//!
//! - `event`: snake_case event name (required)
//! - `component`: module/subsystem (e.g., "compare", "extract")
//! - Use `%` for Display, `?` for Debug formatting

/// Target for all sarg log events.
pub(crate) const SARG_TARGET: &str = "mdbsarg";

/// Macro for debug-level log events.
///
/// # Example
/// ```ignore
/// log_debug!(
///     component = "extract",
///     event = "sarg_collected",
///     column = column.number(),
/// );
/// ```
macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::SARG_TARGET, $($field)*)
    };
}

/// Macro for warn-level log events.
macro_rules! log_warn {
    ($($field:tt)*) => {
        ::tracing::warn!(target: $crate::observability::SARG_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_warn;
