//! Detect events whose base interval overlaps a candidate event.
//!
//! Only each event's stored start and duration are compared; recurrences are
//! not expanded. Adjacent events (where one ends exactly when another starts)
//! are NOT conflicts.

use crate::event::Event;

/// An existing event that overlaps a candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict<'a> {
    pub existing: &'a Event,
    pub overlap_minutes: i64,
}

/// Find every event in `events` that overlaps `candidate`, in iteration order.
///
/// Two events overlap when `a.start < b.end && b.start < a.end`.
/// The overlap duration is `min(a.end, b.end) - max(a.start, b.start)`.
pub fn find_conflicts<'a, I>(candidate: &Event, events: I) -> Vec<Conflict<'a>>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|existing| candidate.overlaps(existing))
        .map(|existing| {
            let overlap_start = candidate.start().max(existing.start());
            let overlap_end = candidate.end().min(existing.end());
            Conflict {
                existing,
                overlap_minutes: (overlap_end - overlap_start).num_minutes(),
            }
        })
        .collect()
}
