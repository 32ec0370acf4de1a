/// Storage key the schedule state snapshot is written under.
pub const STATE_STORAGE_KEY: &str = "pawsistente-app-state";

/// Snapshots whose last update is this many days old are discarded on load.
pub const STALENESS_WINDOW_DAYS: i64 = 7;

pub const DEFAULT_CONVENTION_NAME: &str = "Confuror 2025";
pub const DEFAULT_CONVENTION_START: &str = "2025-10-23";
pub const DEFAULT_TIMEZONE: &str = "America/Mexico_City";
pub const DEFAULT_CALENDAR_DOMAIN: &str = "pawsistente.app";

pub const SPANISH_SCHEDULE_FILE: &str = "schedule.csv";
pub const ENGLISH_SCHEDULE_FILE: &str = "schedule_english.csv";
