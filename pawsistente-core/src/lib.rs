//! Core of pawsistente, a convention schedule browser.
//!
//! - `conflict` flags time overlaps between a candidate and the selected events
//! - `schedule` holds user progress and persists it to a key-value store
//! - `feed` picks the events still waiting for a decision
//! - `loader` parses the convention's schedule CSV
//! - `ics` exports the selection as an iCalendar file

pub mod config;
pub mod conflict;
pub mod constants;
pub mod convention;
pub mod error;
pub mod event;
pub mod feed;
pub mod ics;
pub mod language;
pub mod loader;
pub mod schedule;

pub use error::{PawsError, PawsResult};
pub use event::{Day, Event};
pub use language::Language;
