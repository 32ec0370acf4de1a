//! Time conflict detection between a candidate event and the events a user
//! has already selected.
//!
//! Intervals are half-open: an event ending at 11:00 does not conflict with
//! one starting at 11:00.

use serde::Serialize;

use crate::event::Event;
use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictType {
    /// The intervals intersect without being identical
    Overlap,
    /// Same start and same end
    Exact,
}

/// A selected event that clashes with the candidate being considered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventConflict {
    pub event: Event,
    pub conflict_type: ConflictType,
    /// Length of the shared interval. Exact conflicts report the full duration.
    pub overlap_minutes: i64,
}

/// Whether two events overlap in time.
pub fn has_time_conflict(a: &Event, b: &Event) -> bool {
    a.start < b.end && b.start < a.end
}

/// Every selected event (other than the candidate itself) that overlaps it.
pub fn get_conflicting_events(candidate: &Event, selected: &[Event]) -> Vec<EventConflict> {
    selected
        .iter()
        .filter(|other| other.id != candidate.id)
        .filter(|other| has_time_conflict(candidate, other))
        .map(|other| EventConflict {
            event: other.clone(),
            conflict_type: conflict_type(candidate, other),
            overlap_minutes: overlap_minutes(candidate, other),
        })
        .collect()
}

/// Whether the candidate overlaps any selected event other than itself.
pub fn has_any_conflicts(candidate: &Event, selected: &[Event]) -> bool {
    selected
        .iter()
        .any(|other| other.id != candidate.id && has_time_conflict(candidate, other))
}

/// One-line summary for a conflict warning. Exact conflicts take precedence.
pub fn conflict_summary(conflicts: &[EventConflict], language: Language) -> String {
    let exact = count_of(conflicts, ConflictType::Exact);
    let overlap = count_of(conflicts, ConflictType::Overlap);

    match language {
        Language::Es if exact > 0 => format!("Conflicto exacto con {} evento(s)", exact),
        Language::Es if overlap > 0 => format!("Se superpone con {} evento(s)", overlap),
        Language::En if exact > 0 => format!("Exact conflict with {} event(s)", exact),
        Language::En if overlap > 0 => format!("Overlaps with {} event(s)", overlap),
        _ => String::new(),
    }
}

fn count_of(conflicts: &[EventConflict], kind: ConflictType) -> usize {
    conflicts.iter().filter(|c| c.conflict_type == kind).count()
}

fn conflict_type(a: &Event, b: &Event) -> ConflictType {
    if a.start == b.start && a.end == b.end {
        ConflictType::Exact
    } else {
        ConflictType::Overlap
    }
}

fn overlap_minutes(a: &Event, b: &Event) -> i64 {
    let overlap_start = a.start.max(b.start);
    let overlap_end = a.end.min(b.end);

    if overlap_start >= overlap_end {
        return 0;
    }

    let millis = (overlap_end - overlap_start).num_milliseconds();
    (millis as f64 / 60_000.0).round() as i64
}
