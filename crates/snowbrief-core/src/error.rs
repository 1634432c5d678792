use thiserror::Error;

/// Validation errors exposed by `snowbrief-core` constructors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("utc offset must be a whole hour within ±23: {hours}")]
    InvalidUtcOffset { hours: i8 },

    #[error("session boundaries must satisfy open <= lunch_start <= lunch_end <= close")]
    UnorderedSessionBoundaries,
    #[error("session boundary {minutes} exceeds the minutes in a day")]
    SessionBoundaryOutOfRange { minutes: u16 },
}
