//! Selecting and ordering the events a user browses through.

use serde::Serialize;

use crate::event::{Day, Event};
use crate::schedule::ScheduleState;

/// Events sharing a time slot, in start order.
#[derive(Debug, Clone, Serialize)]
pub struct EventGroup {
    pub time_slot: String,
    pub events: Vec<Event>,
}

pub fn events_for_days<'a>(events: &'a [Event], days: &[Day]) -> Vec<&'a Event> {
    events.iter().filter(|e| days.contains(&e.day)).collect()
}

/// Days that have at least one event, in convention order.
pub fn available_days(events: &[Event]) -> Vec<Day> {
    let mut days: Vec<Day> = events.iter().map(|e| e.day).collect();
    days.sort();
    days.dedup();
    days
}

/// Case-insensitive search over the fields shown on an event card.
/// An empty `days` slice means every day.
pub fn search_events<'a>(events: &'a [Event], query: &str, days: &[Day]) -> Vec<&'a Event> {
    let query = query.trim().to_lowercase();

    events
        .iter()
        .filter(|e| days.is_empty() || days.contains(&e.day))
        .filter(|e| query.is_empty() || matches_query(e, &query))
        .collect()
}

fn matches_query(event: &Event, query: &str) -> bool {
    let contains = |s: &str| s.to_lowercase().contains(query);

    contains(&event.title)
        || contains(&event.description)
        || contains(&event.location)
        || contains(&event.time_slot)
        || event.panelist.as_deref().is_some_and(contains)
}

/// Group events by time slot, ordering groups by their earliest start.
pub fn group_by_time_slot(events: &[Event]) -> Vec<EventGroup> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.title.cmp(&b.title)));

    let mut groups: Vec<EventGroup> = Vec::new();
    for event in sorted {
        let slot = (event.day, event.time_slot.as_str());
        match groups
            .iter_mut()
            .find(|g| g.events[0].day == slot.0 && g.time_slot == slot.1)
        {
            Some(group) => group.events.push(event.clone()),
            None => groups.push(EventGroup {
                time_slot: event.time_slot.clone(),
                events: vec![event.clone()],
            }),
        }
    }
    groups
}

/// Walk the groups in order, yielding `(group_index, event_index, event)` where
/// `event_index` is the position inside its group.
pub fn feed_cursors(groups: &[EventGroup]) -> impl Iterator<Item = (usize, usize, &Event)> {
    groups.iter().enumerate().flat_map(|(group_index, group)| {
        group
            .events
            .iter()
            .enumerate()
            .map(move |(event_index, event)| (group_index, event_index, event))
    })
}

/// Events still waiting for a decision: on a selected day, not selected, and
/// either never rejected or rejected but returned to the unseen pool.
pub fn pending_events(events: &[Event], state: &ScheduleState) -> Vec<Event> {
    let mut pending: Vec<Event> = events
        .iter()
        .filter(|e| state.selected_days.contains(&e.day))
        .filter(|e| !state.is_selected(&e.id))
        .filter(|e| !state.is_rejected(&e.id) || state.is_unseen(&e.id))
        .cloned()
        .collect();

    pending.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.title.cmp(&b.title)));
    pending
}

/// Set the display flag from the schedule state.
pub fn mark_selected(events: &mut [Event], state: &ScheduleState) {
    for event in events.iter_mut() {
        event.is_selected = state.is_selected(&event.id);
    }
}
