//! An ordered collection of events with day, title and free-slot queries.

use chrono::NaiveDate;

use crate::conflict::{self, Conflict};
use crate::event::Event;

/// Events in insertion order. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Agenda {
    events: Vec<Event>,
}

impl Agenda {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&mut self, event: Event) {
        tracing::debug!(title = event.title(), start = %event.start(), "adding event");
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events that occur on `day`, recurrences included.
    pub fn events_in_day(&self, day: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.is_in_day(day)).collect()
    }

    /// Events whose title is exactly `title`.
    pub fn find_by_title(&self, title: &str) -> Vec<&Event> {
        self.events.iter().filter(|e| e.title() == title).collect()
    }

    /// Whether `candidate` overlaps none of the events.
    ///
    /// Recurring events are only checked against their first occurrence.
    pub fn is_free_for(&self, candidate: &Event) -> bool {
        match self.events.iter().find(|existing| candidate.overlaps(existing)) {
            Some(existing) => {
                tracing::debug!(
                    candidate = candidate.title(),
                    existing = existing.title(),
                    "slot taken"
                );
                false
            }
            None => true,
        }
    }

    /// Every event overlapping `candidate`, with the overlap length.
    pub fn conflicts_for(&self, candidate: &Event) -> Vec<Conflict<'_>> {
        conflict::find_conflicts(candidate, &self.events)
    }
}

impl<'a> IntoIterator for &'a Agenda {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl FromIterator<Event> for Agenda {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut agenda = Agenda::new();
        agenda.extend(iter);
        agenda
    }
}

impl Extend<Event> for Agenda {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        for event in iter {
            self.add_event(event);
        }
    }
}
