//! Error types for the escala-rotation crate.

/// Error type for all fallible operations in the escala-rotation crate.
///
/// The only configuration failure is an empty home rotation; every other
/// edge condition (no cleanup groups, empty eligible set, unset preferred
/// day) is a policy default or a silent skip, not an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RotationError {
    /// Returned when the home rotation has no groups to draw from.
    #[error("no home groups registered")]
    NoHomeGroups,

    /// Wraps an error originating from the escala-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },
}

impl From<escala_calendar::CalendarError> for RotationError {
    fn from(e: escala_calendar::CalendarError) -> Self {
        RotationError::Calendar {
            reason: e.to_string(),
        }
    }
}
