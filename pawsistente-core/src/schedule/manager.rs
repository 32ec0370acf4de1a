//! The schedule state manager.
//!
//! Owns the user's `ScheduleState`, keeps the selected / rejected / unseen
//! lists consistent, and writes the whole snapshot to storage after every
//! change. Persistence is advisory: a failed write is logged and the
//! in-memory state stays authoritative for the rest of the session.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use tracing::{debug, info, warn};

use super::state::{Phase, ProgressSummary, ScheduleState};
use super::storage::StateStorage;
use super::subscribers::{SubscriptionId, Subscribers};
use crate::constants::{STALENESS_WINDOW_DAYS, STATE_STORAGE_KEY};
use crate::event::{Day, Event};

pub struct ScheduleStateManager<S: StateStorage> {
    state: ScheduleState,
    storage: S,
    key: String,
    subscribers: Subscribers,
}

impl<S: StateStorage> ScheduleStateManager<S> {
    /// Create a manager over `storage`, restoring a fresh enough snapshot if one exists.
    pub fn create(storage: S) -> Self {
        Self::create_with_key(storage, STATE_STORAGE_KEY)
    }

    pub fn create_with_key(storage: S, key: &str) -> Self {
        let mut manager = ScheduleStateManager {
            state: initial_state(),
            storage,
            key: key.to_string(),
            subscribers: Subscribers::default(),
        };
        manager.load();
        manager
    }

    /// Drop all subscribers and hand back the storage backend.
    pub fn dispose(mut self) -> S {
        self.subscribers.clear();
        self.storage
    }

    fn load(&mut self) {
        let stored = match self.storage.read(&self.key) {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                debug!(key = %self.key, "No stored schedule state");
                return;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load schedule state");
                self.clear_state();
                return;
            }
        };

        match serde_json::from_str::<ScheduleState>(&stored) {
            Ok(state) if is_fresh(state.last_updated, Utc::now()) => {
                debug!(
                    days = state.selected_days.len(),
                    selected = state.selected_events.len(),
                    rejected = state.rejected_events.len(),
                    "Restored schedule state"
                );
                self.state = state;
            }
            Ok(state) => {
                info!(last_updated = %state.last_updated, "Discarding stale schedule state");
                self.clear_state();
            }
            Err(e) => {
                warn!(error = %e, "Stored schedule state is unreadable, starting over");
                self.clear_state();
            }
        }
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.state) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize schedule state");
                return;
            }
        };

        if let Err(e) = self.storage.write(&self.key, &json) {
            warn!(error = %e, "Failed to save schedule state");
        }
    }

    /// Stamp, persist, then notify. Every state change goes through here.
    fn commit(&mut self) {
        self.state.last_updated = now_millis();
        self.persist();
        self.subscribers.notify(&self.state);
    }

    // Subscriptions

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ScheduleState) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn has_subscribers(&self) -> bool {
        !self.subscribers.is_empty()
    }

    // Queries

    pub fn snapshot(&self) -> &ScheduleState {
        &self.state
    }

    pub fn selected_days(&self) -> &[Day] {
        &self.state.selected_days
    }

    pub fn selected_events(&self) -> &[Event] {
        &self.state.selected_events
    }

    pub fn rejected_events(&self) -> &[String] {
        &self.state.rejected_events
    }

    pub fn unseen_events(&self) -> &[String] {
        &self.state.unseen_events
    }

    pub fn current_state(&self) -> Phase {
        self.state.current_state
    }

    pub fn current_group_index(&self) -> usize {
        self.state.current_group_index
    }

    pub fn current_event_index(&self) -> usize {
        self.state.current_event_index
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.state.last_updated
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.state.is_selected(id)
    }

    pub fn is_rejected(&self, id: &str) -> bool {
        self.state.is_rejected(id)
    }

    pub fn has_progress(&self) -> bool {
        self.state.has_progress()
    }

    pub fn progress_summary(&self) -> ProgressSummary {
        self.state.progress_summary()
    }

    // Mutators

    pub fn set_selected_days(&mut self, days: Vec<Day>) {
        let mut unique = Vec::with_capacity(days.len());
        for day in days {
            if !unique.contains(&day) {
                unique.push(day);
            }
        }
        self.state.selected_days = unique;
        self.commit();
    }

    /// Replace the selection wholesale. Duplicate ids keep their first occurrence.
    pub fn set_selected_events(&mut self, events: Vec<Event>) {
        let mut unique: Vec<Event> = Vec::with_capacity(events.len());
        for event in events {
            if !unique.iter().any(|e| e.id == event.id) {
                unique.push(event);
            }
        }

        self.state
            .rejected_events
            .retain(|id| !unique.iter().any(|e| &e.id == id));
        self.state
            .unseen_events
            .retain(|id| !unique.iter().any(|e| &e.id == id));
        self.state.selected_events = unique;
        self.commit();
    }

    /// Returns false (and changes nothing) if the event is already selected.
    pub fn add_selected_event(&mut self, event: Event) -> bool {
        if self.state.is_selected(&event.id) {
            return false;
        }

        self.state.rejected_events.retain(|id| *id != event.id);
        self.state.unseen_events.retain(|id| *id != event.id);
        self.state.selected_events.push(event);
        self.commit();
        true
    }

    /// Deselect an event; its id is tracked as rejected afterwards.
    pub fn remove_selected_event(&mut self, id: &str) {
        let before = self.state.selected_events.len();
        self.state.selected_events.retain(|e| e.id != id);
        let removed = self.state.selected_events.len() != before;

        let rejected = self.insert_rejected(id);
        if removed || rejected {
            self.commit();
        }
    }

    pub fn add_rejected_event(&mut self, id: &str) {
        let before = self.state.selected_events.len();
        self.state.selected_events.retain(|e| e.id != id);
        let deselected = self.state.selected_events.len() != before;

        if self.insert_rejected(id) || deselected {
            self.commit();
        }
    }

    fn insert_rejected(&mut self, id: &str) -> bool {
        if self.state.is_rejected(id) {
            return false;
        }
        self.state.rejected_events.push(id.to_string());
        true
    }

    /// Replace the unseen pool. Selected ids are left out.
    pub fn set_unseen_events(&mut self, ids: Vec<String>) {
        let mut unique: Vec<String> = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique.contains(&id) && !self.state.is_selected(&id) {
                unique.push(id);
            }
        }
        self.state.unseen_events = unique;
        self.commit();
    }

    pub fn add_unseen_event(&mut self, id: &str) {
        if self.state.is_unseen(id) || self.state.is_selected(id) {
            return;
        }
        self.state.unseen_events.push(id.to_string());
        self.commit();
    }

    pub fn remove_unseen_event(&mut self, id: &str) {
        if !self.state.is_unseen(id) {
            return;
        }
        self.state.unseen_events.retain(|u| u != id);
        self.commit();
    }

    /// Let every rejected event resurface in the feed. Rejected stays as is.
    /// Returns how many ids were added to the unseen pool.
    pub fn move_rejected_to_unseen(&mut self) -> usize {
        let missing: Vec<String> = self
            .state
            .rejected_events
            .iter()
            .filter(|id| !self.state.is_unseen(id) && !self.state.is_selected(id))
            .cloned()
            .collect();

        if missing.is_empty() {
            return 0;
        }

        let count = missing.len();
        self.state.unseen_events.extend(missing);
        self.commit();
        count
    }

    /// Any phase can follow any other.
    pub fn set_current_state(&mut self, phase: Phase) {
        self.state.current_state = phase;
        self.commit();
    }

    pub fn set_current_group_index(&mut self, index: usize) {
        self.state.current_group_index = index;
        self.commit();
    }

    pub fn set_current_event_index(&mut self, index: usize) {
        self.state.current_event_index = index;
        self.commit();
    }

    /// Back to day selection, keeping every selection.
    pub fn reset_navigation(&mut self) {
        self.state.current_group_index = 0;
        self.state.current_event_index = 0;
        self.state.current_state = Phase::DaySelection;
        self.commit();
    }

    pub fn clear_state(&mut self) {
        self.state = initial_state();
        self.commit();
    }
}

fn initial_state() -> ScheduleState {
    ScheduleState {
        last_updated: now_millis(),
        ..ScheduleState::default()
    }
}

// Snapshots store milliseconds; keep memory at the same precision so a reload is lossless
fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

fn is_fresh(last_updated: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - last_updated < Duration::days(STALENESS_WINDOW_DAYS)
}
