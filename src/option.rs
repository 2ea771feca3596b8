/// What the evaluator does with a leaf whose column type has no comparison rule.
///
/// Every policy emits an `unsupported_column_type` diagnostic first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnsupportedTypePolicy {
    /// Treat the leaf as matching, which disables filtering on that column.
    #[default]
    Match,
    /// Treat the leaf as not matching.
    Reject,
    /// Fail the row's evaluation with [`crate::SargError::UnsupportedColumnType`].
    Fail,
}

/// Evaluation options for a [`crate::SargEngine`].
#[derive(Clone, Debug, Default)]
pub struct SargOptions {
    pub(crate) unsupported_type: UnsupportedTypePolicy,
}

impl SargOptions {
    /// Sets the policy applied to leaves on columns of unsupported types.
    pub fn unsupported_type(self, unsupported_type: UnsupportedTypePolicy) -> Self {
        SargOptions { unsupported_type }
    }
}
