//! Termination of a recurrence, as an inclusive end date or an occurrence count.
//!
//! Both forms are stored once computed: building from an end date derives the
//! count, building from a count derives the end date, using the same
//! [`Frequency`] arithmetic so the two constructors are inverses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, Result};
use crate::frequency::Frequency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Termination {
    termination_date: NaiveDate,
    occurrences: u32,
}

impl Termination {
    /// Terminate on `end_inclusive`, the start date of the last occurrence.
    ///
    /// The count is `units_between(start, end_inclusive) + 1`.
    ///
    /// # Errors
    /// Returns `AgendaError::TerminationBeforeStart` if `end_inclusive < start`.
    pub fn from_end_date(
        start: NaiveDate,
        frequency: Frequency,
        end_inclusive: NaiveDate,
    ) -> Result<Self> {
        if end_inclusive < start {
            return Err(AgendaError::TerminationBeforeStart {
                start,
                end: end_inclusive,
            });
        }
        let units = frequency.units_between(start, end_inclusive);
        let occurrences = u32::try_from(units + 1).map_err(|_| AgendaError::OutOfRange)?;
        Ok(Self {
            termination_date: end_inclusive,
            occurrences,
        })
    }

    /// Terminate after `occurrences` occurrences, the first one on `start`.
    ///
    /// # Errors
    /// Returns `AgendaError::ZeroOccurrences` for a zero count and
    /// `AgendaError::OutOfRange` if the last occurrence is not a representable date.
    pub fn from_count(start: NaiveDate, frequency: Frequency, occurrences: u32) -> Result<Self> {
        if occurrences == 0 {
            return Err(AgendaError::ZeroOccurrences);
        }
        let termination_date = frequency
            .plus(start, i64::from(occurrences) - 1)
            .ok_or(AgendaError::OutOfRange)?;
        Ok(Self {
            termination_date,
            occurrences,
        })
    }

    pub fn termination_date_inclusive(&self) -> NaiveDate {
        self.termination_date
    }

    pub fn occurrence_count(&self) -> u32 {
        self.occurrences
    }
}
