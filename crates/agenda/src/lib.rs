//! # agenda
//!
//! Calendar events that may repeat on a daily, weekly or monthly cadence.
//!
//! Answers two questions about a collection of events: which events occur on a
//! given day (expanding recurrences, honoring terminations and exceptions), and
//! whether a proposed event fits without overlapping an existing one.
//!
//! ## Modules
//!
//! - [`frequency`]: calendar-aware unit differencing and stepping
//! - [`termination`]: end-date / occurrence-count bounds for a recurrence
//! - [`repetition`]: cadence, termination and exception dates
//! - [`event`]: events and the day-membership test
//! - [`conflict`]: overlap detection between an event and a list of events
//! - [`agenda`]: ordered event collection and its queries
//! - [`error`]: Error types

pub mod agenda;
pub mod conflict;
pub mod error;
pub mod event;
pub mod frequency;
pub mod repetition;
pub mod termination;

pub use agenda::Agenda;
pub use conflict::{find_conflicts, Conflict};
pub use error::AgendaError;
pub use event::{Event, Recurrence};
pub use frequency::Frequency;
pub use repetition::Repetition;
pub use termination::Termination;
