//! Recurrence state attached to an event: cadence, optional termination and
//! excluded occurrence dates.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::frequency::Frequency;
use crate::termination::Termination;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repetition {
    frequency: Frequency,
    termination: Option<Termination>,
    /// Occurrence start dates that are skipped. Dates that are not an
    /// occurrence start have no effect.
    exceptions: BTreeSet<NaiveDate>,
}

impl Repetition {
    /// An unbounded repetition with no exceptions.
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            termination: None,
            exceptions: BTreeSet::new(),
        }
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// `None` means the repetition never ends.
    pub fn termination(&self) -> Option<&Termination> {
        self.termination.as_ref()
    }

    pub fn exceptions(&self) -> &BTreeSet<NaiveDate> {
        &self.exceptions
    }

    pub fn is_exception(&self, date: NaiveDate) -> bool {
        self.exceptions.contains(&date)
    }

    /// Skip the occurrence starting on `date`. Adding a date twice is the same
    /// as adding it once.
    pub fn add_exception(&mut self, date: NaiveDate) {
        if !self.exceptions.insert(date) {
            tracing::trace!(%date, "exception already present");
        }
    }

    /// Replace the termination; the previous one, if any, is dropped.
    pub fn set_termination(&mut self, termination: Termination) {
        if let Some(previous) = self.termination.replace(termination) {
            tracing::trace!(?previous, ?termination, "termination replaced");
        }
    }
}
