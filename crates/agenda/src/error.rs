//! Error types for agenda operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgendaError {
    /// The event has no repetition, or its repetition has no termination.
    #[error("no termination defined for this event")]
    NoTermination,

    #[error("event duration must not be negative")]
    NegativeDuration,

    /// Date arithmetic left the range chrono can represent.
    #[error("date out of range")]
    OutOfRange,

    #[error("a termination needs at least one occurrence")]
    ZeroOccurrences,

    #[error("termination date {end} is before start date {start}")]
    TerminationBeforeStart {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Unknown frequency: {0}")]
    UnknownFrequency(String),
}

pub type Result<T> = std::result::Result<T, AgendaError>;
