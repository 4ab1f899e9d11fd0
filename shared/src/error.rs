//! Error types for the date derivation engine

use thiserror::Error;

use crate::timing::AnchorField;

/// Errors from the strict derivation entry point
///
/// The lenient [`derive_dates`](crate::timing::derive_dates) contract maps
/// every variant to an empty delta. Callers that want to tell "nothing to
/// derive yet" apart from genuinely bad input use
/// [`try_derive_dates`](crate::timing::try_derive_dates) and match on this.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    /// The anchor's date field is not set. Expected while the user is still
    /// filling in the form.
    #[error("anchor date ({0}) is not set")]
    MissingAnchorDate(AnchorField),

    /// No days-to-maturity figure, so no arithmetic is possible. Expected
    /// until the user supplies one.
    #[error("days to maturity is not set")]
    MissingDaysToMaturity,

    /// A timing parameter was negative.
    #[error("negative {field}: {value}")]
    NegativeTiming { field: &'static str, value: i32 },

    /// The offset pushed a date outside the representable calendar range.
    #[error("date arithmetic out of range")]
    DateOutOfRange,
}

impl DeriveError {
    /// Whether this is an expected "not enough info yet" condition rather
    /// than invalid input.
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            DeriveError::MissingAnchorDate(_) | DeriveError::MissingDaysToMaturity
        )
    }
}
