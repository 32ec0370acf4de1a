//! ICS export.
//!
//! Turns the selected events into an RFC 5545 calendar that Google Calendar
//! and Apple Calendar can import.

mod generate;

pub use generate::{ExportOptions, export_filename, generate_calendar, validate_events};
