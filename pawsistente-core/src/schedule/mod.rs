//! User progress: selected days and events, skipped events, UI phase.

mod manager;
mod state;
mod storage;
mod subscribers;

pub use manager::ScheduleStateManager;
pub use state::{Phase, ProgressSummary, ScheduleState};
pub use storage::{FileStorage, MemoryStorage, StateStorage};
pub use subscribers::SubscriptionId;
