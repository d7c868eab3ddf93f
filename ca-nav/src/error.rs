//! Error types.

use chrono::NaiveDateTime;

/// Errors from [`crate::parse_iso_local_date`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The input is not an ISO 8601 date or date-time.
    #[error("invalid ISO date-time: {0:?}")]
    Invalid(String),

    /// The wall-clock time falls in a gap of the target timezone (DST change).
    #[error("local time {0} does not exist in the target timezone")]
    NonexistentLocal(NaiveDateTime),
}
