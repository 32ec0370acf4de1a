use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::{Day, Event};

/// UI phase the user is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    #[default]
    DaySelection,
    EventBrowsing,
    Summary,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::DaySelection => write!(f, "day-selection"),
            Phase::EventBrowsing => write!(f, "event-browsing"),
            Phase::Summary => write!(f, "summary"),
        }
    }
}

/// Snapshot of a user's progress, persisted as one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleState {
    pub selected_days: Vec<Day>,
    pub selected_events: Vec<Event>,
    pub rejected_events: Vec<String>,
    /// Rejected ids allowed to show up in the feed again
    pub unseen_events: Vec<String>,
    /// Time slot group being browsed
    pub current_group_index: usize,
    /// Position inside the current group
    pub current_event_index: usize,
    pub current_state: Phase,
    /// A snapshot without this field reads as the epoch and is therefore stale
    #[serde(with = "chrono::serde::ts_milliseconds", default = "unknown_age")]
    pub last_updated: DateTime<Utc>,
}

fn unknown_age() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

impl Default for ScheduleState {
    fn default() -> Self {
        ScheduleState {
            selected_days: Vec::new(),
            selected_events: Vec::new(),
            rejected_events: Vec::new(),
            unseen_events: Vec::new(),
            current_group_index: 0,
            current_event_index: 0,
            current_state: Phase::DaySelection,
            last_updated: Utc::now(),
        }
    }
}

impl ScheduleState {
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_events.iter().any(|e| e.id == id)
    }

    pub fn is_rejected(&self, id: &str) -> bool {
        self.rejected_events.iter().any(|r| r == id)
    }

    pub fn is_unseen(&self, id: &str) -> bool {
        self.unseen_events.iter().any(|u| u == id)
    }

    pub fn has_progress(&self) -> bool {
        !self.selected_days.is_empty()
            || !self.selected_events.is_empty()
            || !self.rejected_events.is_empty()
    }

    pub fn progress_summary(&self) -> ProgressSummary {
        ProgressSummary {
            days: self.selected_days.len(),
            selected: self.selected_events.len(),
            rejected: self.rejected_events.len(),
        }
    }
}

/// Counts shown on the progress banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub days: usize,
    pub selected: usize,
    pub rejected: usize,
}
