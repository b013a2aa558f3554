//! Calendar events and the day-membership test for their occurrences.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::error::{AgendaError, Result};
use crate::frequency::Frequency;
use crate::repetition::Repetition;
use crate::termination::Termination;

/// Whether an event happens once or repeats on a cadence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Recurrence {
    #[default]
    Once,
    Repeating(Repetition),
}

/// A titled event with a start instant and a duration, optionally repeating.
///
/// The stored `start`/`duration` describe the first occurrence. Later
/// occurrences keep the same start time of day and the same duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    title: String,
    start: NaiveDateTime,
    duration: Duration,
    recurrence: Recurrence,
}

impl Event {
    /// Create a one-shot event.
    ///
    /// # Errors
    /// Returns `AgendaError::NegativeDuration` for a negative `duration` and
    /// `AgendaError::OutOfRange` if `start + duration` is not representable.
    pub fn new(title: impl Into<String>, start: NaiveDateTime, duration: Duration) -> Result<Self> {
        if duration < Duration::zero() {
            return Err(AgendaError::NegativeDuration);
        }
        if start.checked_add_signed(duration).is_none() {
            return Err(AgendaError::OutOfRange);
        }
        Ok(Self {
            title: title.into(),
            start,
            duration,
            recurrence: Recurrence::Once,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// End of the first occurrence.
    pub fn end(&self) -> NaiveDateTime {
        // Checked in `Event::new`.
        self.start + self.duration
    }

    pub fn recurrence(&self) -> &Recurrence {
        &self.recurrence
    }

    pub fn repetition(&self) -> Option<&Repetition> {
        match &self.recurrence {
            Recurrence::Once => None,
            Recurrence::Repeating(repetition) => Some(repetition),
        }
    }

    /// Make the event repeat every `frequency` unit, without end or exceptions.
    ///
    /// Calling it again starts over from a fresh repetition.
    pub fn set_repetition(&mut self, frequency: Frequency) {
        self.recurrence = Recurrence::Repeating(Repetition::new(frequency));
    }

    /// Skip the occurrence starting on `date`. Does nothing on a one-shot event.
    pub fn add_exception(&mut self, date: NaiveDate) {
        if let Recurrence::Repeating(repetition) = &mut self.recurrence {
            repetition.add_exception(date);
        }
    }

    /// End the repetition with the occurrence starting on `end_inclusive`.
    /// Does nothing on a one-shot event.
    ///
    /// # Errors
    /// See [`Termination::from_end_date`].
    pub fn set_termination_date(&mut self, end_inclusive: NaiveDate) -> Result<()> {
        let start = self.start.date();
        if let Recurrence::Repeating(repetition) = &mut self.recurrence {
            let termination =
                Termination::from_end_date(start, repetition.frequency(), end_inclusive)?;
            repetition.set_termination(termination);
        }
        Ok(())
    }

    /// End the repetition after `occurrences` occurrences, the first included.
    /// Does nothing on a one-shot event.
    ///
    /// # Errors
    /// See [`Termination::from_count`].
    pub fn set_termination_count(&mut self, occurrences: u32) -> Result<()> {
        let start = self.start.date();
        if let Recurrence::Repeating(repetition) = &mut self.recurrence {
            let termination = Termination::from_count(start, repetition.frequency(), occurrences)?;
            repetition.set_termination(termination);
        }
        Ok(())
    }

    /// # Errors
    /// Returns `AgendaError::NoTermination` unless the event repeats with a
    /// termination set.
    pub fn number_of_occurrences(&self) -> Result<u32> {
        self.termination().map(Termination::occurrence_count)
    }

    /// Start date of the last occurrence.
    ///
    /// # Errors
    /// Returns `AgendaError::NoTermination` unless the event repeats with a
    /// termination set.
    pub fn termination_date(&self) -> Result<NaiveDate> {
        self.termination().map(Termination::termination_date_inclusive)
    }

    fn termination(&self) -> Result<&Termination> {
        self.repetition()
            .and_then(Repetition::termination)
            .ok_or(AgendaError::NoTermination)
    }

    /// Whether some occurrence of this event covers any part of `day`.
    ///
    /// Only the latest occurrence starting on or before `day` is considered:
    /// the day must fall between that occurrence's start date and end date,
    /// and the occurrence must not be an exception.
    pub fn is_in_day(&self, day: NaiveDate) -> bool {
        let start_date = self.start.date();
        if start_date <= day && day <= self.end().date() {
            return true;
        }

        let Recurrence::Repeating(repetition) = &self.recurrence else {
            return false;
        };
        if day < start_date {
            return false;
        }

        if let Some(termination) = repetition.termination() {
            let last_end = self.occurrence_end_date(termination.termination_date_inclusive());
            if day > last_end {
                return false;
            }
        }

        let frequency = repetition.frequency();
        let units = frequency.units_between(start_date, day);
        if units < 0 {
            return false;
        }
        let Some(occurrence_start) = frequency.plus(start_date, units) else {
            return false;
        };
        if day < occurrence_start || day > self.occurrence_end_date(occurrence_start) {
            return false;
        }

        !repetition.is_exception(occurrence_start)
    }

    /// Whether the first occurrences of the two events share at least one
    /// instant. Touching end points do not overlap.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.end() && self.end() > other.start
    }

    /// End date of the occurrence starting on `occurrence_start`, saturating at
    /// the last representable date.
    fn occurrence_end_date(&self, occurrence_start: NaiveDate) -> NaiveDate {
        occurrence_start
            .and_time(self.start.time())
            .checked_add_signed(self.duration)
            .map_or(NaiveDate::MAX, |end| end.date())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event{{title='{}', start={}, duration={}}}",
            self.title, self.start, self.duration
        )
    }
}
