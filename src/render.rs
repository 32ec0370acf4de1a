//! Terminal rendering for pawsistente types.
//!
//! Adds colored output to pawsistente-core types using owo_colors.

use owo_colors::OwoColorize;
use pawsistente_core::Language;
use pawsistente_core::conflict::{ConflictType, EventConflict, conflict_summary};
use pawsistente_core::convention::Convention;
use pawsistente_core::event::Event;
use pawsistente_core::schedule::{Phase, ProgressSummary};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ConflictType {
    fn render(&self) -> String {
        match self {
            ConflictType::Exact => "exact".red().to_string(),
            ConflictType::Overlap => "overlap".yellow().to_string(),
        }
    }
}

impl Render for Phase {
    fn render(&self) -> String {
        self.to_string().cyan().to_string()
    }
}

/// `[event_12] 15:00-16:30  Drawing paws  Salón A`
pub fn event_line(event: &Event) -> String {
    let marker = if event.is_selected {
        "✓".green().to_string()
    } else {
        " ".to_string()
    };

    format!(
        "{} {} {}  {}  {}",
        marker,
        format!("[{}]", event.id).dimmed(),
        event.time_slot,
        event.title.bold(),
        event.full_location().dimmed()
    )
}

/// Multi-line card shown while browsing.
pub fn event_card(event: &Event, convention: &Convention, language: Language) -> String {
    let messages = language.messages();
    let mut lines = Vec::new();

    lines.push(format!("{}", event.title.bold()));
    lines.push(format!(
        "  {} · {} · {}",
        convention.format_event_date(&event.start, language),
        event.time_slot,
        event.full_location()
    ));

    if let Some(ref panelist) = event.panelist {
        lines.push(format!("  {}: {}", messages.hosted_by, panelist));
    }
    if let Some(ref track) = event.track {
        lines.push(format!("  {}: {}", messages.category, track));
    }

    let description = if event.description.is_empty() {
        messages.no_description_available.dimmed().to_string()
    } else {
        event.description.clone()
    };
    lines.push(String::new());
    lines.push(format!("  {}", description));

    lines.join("\n")
}

/// Warning block listing each conflict, empty when there are none.
pub fn conflict_block(conflicts: &[EventConflict], language: Language) -> Vec<String> {
    if conflicts.is_empty() {
        return Vec::new();
    }

    let heading = format!(
        "{}: {}",
        language.messages().conflict_warning,
        conflict_summary(conflicts, language)
    );
    let mut lines = vec![format!("  {} {}", "⚠".yellow(), heading.yellow())];
    for conflict in conflicts {
        lines.push(format!(
            "    {} {} ({}, {} min)",
            conflict.event.time_slot.dimmed(),
            conflict.event.title,
            conflict.conflict_type.render(),
            conflict.overlap_minutes
        ));
    }
    lines
}

pub fn progress_line(summary: &ProgressSummary, language: Language) -> String {
    let messages = language.messages();
    format!(
        "{}: {}  {}: {}  {}: {}",
        messages.selected_days,
        summary.days,
        messages.selected,
        summary.selected.to_string().green(),
        messages.skipped,
        summary.rejected.to_string().red()
    )
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pawsistente_core::Day;

    fn make_event(id: &str, hour: u32) -> Event {
        Event::new(
            id,
            format!("Panel {}", id),
            Utc.with_ymd_and_hms(2025, 10, 23, hour, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 10, 23, hour + 1, 0, 0).unwrap(),
            Day::Thursday,
            format!("{:02}:00-{:02}:00", hour, hour + 1),
        )
        .unwrap()
    }

    #[test]
    fn test_conflict_block_empty_without_conflicts() {
        assert!(conflict_block(&[], Language::Es).is_empty());
    }

    #[test]
    fn test_conflict_block_heading_is_localized() {
        let conflicts = vec![EventConflict {
            event: make_event("event_2", 16),
            conflict_type: ConflictType::Exact,
            overlap_minutes: 60,
        }];

        let spanish = conflict_block(&conflicts, Language::Es);
        let english = conflict_block(&conflicts, Language::En);

        assert_eq!(spanish.len(), 2, "heading plus one line per conflict");
        assert!(spanish[0].contains("Conflicto de horario"), "got: {}", spanish[0]);
        assert!(english[0].contains("Schedule conflict"), "got: {}", english[0]);
        assert!(spanish[1].contains("Panel event_2"), "got: {}", spanish[1]);
    }
}
