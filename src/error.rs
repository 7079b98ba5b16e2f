// File: src/error.rs
//! Typed failures shared by every store operation.
use chrono::{DateTime, Utc};
use std::fmt;

pub type EventResult<T> = Result<T, EventError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The candidate interval intersects an existing event and overlap was disallowed.
    Overlap { conflicting_id: String },
    NotFound(String),
    /// Only raised when `enforce_time_order` is on.
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    InvalidRecurrence(String),
}

impl EventError {
    pub fn is_overlap(&self) -> bool {
        matches!(self, Self::Overlap { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventError::Overlap { conflicting_id } => write!(
                f,
                "Event overlaps with an existing event ({})",
                conflicting_id
            ),
            EventError::NotFound(id) => write!(f, "Event with ID {} not found", id),
            EventError::InvalidRange { start, end } => write!(
                f,
                "Event start {} must be before end {}",
                start.to_rfc3339(),
                end.to_rfc3339()
            ),
            EventError::InvalidRecurrence(reason) => {
                write!(f, "Invalid recurrence rule: {}", reason)
            }
        }
    }
}

impl std::error::Error for EventError {}
