//! Loading the convention schedule.

mod csv;

use std::path::{Path, PathBuf};

use crate::constants::{ENGLISH_SCHEDULE_FILE, SPANISH_SCHEDULE_FILE};
use crate::language::Language;

pub use csv::parse_schedule;

pub fn schedule_file_for(language: Language) -> &'static str {
    match language {
        Language::Es => SPANISH_SCHEDULE_FILE,
        Language::En => ENGLISH_SCHEDULE_FILE,
    }
}

/// Files to try in order: the one for `language`, then the Spanish one.
pub fn schedule_candidates(dir: &Path, language: Language) -> Vec<PathBuf> {
    let mut candidates = vec![dir.join(schedule_file_for(language))];
    if language != Language::Es {
        candidates.push(dir.join(SPANISH_SCHEDULE_FILE));
    }
    candidates
}
