use anyhow::Result;
use owo_colors::OwoColorize;
use pawsistente_core::conflict::{EventConflict, get_conflicting_events};
use pawsistente_core::event::Event;
use pawsistente_core::schedule::{Phase, ProgressSummary};
use serde::Serialize;

use crate::render::{Render, event_line, progress_line};
use crate::session::Session;

#[derive(Serialize)]
struct ScheduleOutput<'a> {
    summary: ProgressSummary,
    events: Vec<ScheduledEvent<'a>>,
}

#[derive(Serialize)]
struct ScheduledEvent<'a> {
    #[serde(flatten)]
    event: &'a Event,
    conflicts: Vec<String>,
}

pub fn run(session: &mut Session, json: bool) -> Result<()> {
    let language = session.language();
    let messages = language.messages();

    session.manager.set_current_state(Phase::Summary);

    let mut events: Vec<Event> = session.manager.selected_events().to_vec();
    events.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.title.cmp(&b.title)));

    if json {
        let output = ScheduleOutput {
            summary: session.manager.progress_summary(),
            events: events
                .iter()
                .map(|event| ScheduledEvent {
                    event,
                    conflicts: get_conflicting_events(event, &events)
                        .into_iter()
                        .map(|c| c.event.id)
                        .collect(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("{}", messages.no_events_selected.dimmed());
        return Ok(());
    }

    println!(
        "{} ({} {})",
        messages.your_schedule.bold(),
        events.len(),
        messages.events_selected
    );

    let mut current_day = None;
    for event in &events {
        if current_day != Some(event.day) {
            println!();
            println!(
                "{} {}",
                event.day.name(language).bold(),
                session.convention.format_day_with_date(event.day, language).dimmed()
            );
            current_day = Some(event.day);
        }

        println!("  {}", event_line(event));
        let conflicts = get_conflicting_events(event, &events);
        if !conflicts.is_empty() {
            println!("      {}", render_conflicts(&conflicts));
        }
    }

    println!();
    println!("{}", progress_line(&session.manager.progress_summary(), language));
    Ok(())
}

fn render_conflicts(conflicts: &[EventConflict]) -> String {
    conflicts
        .iter()
        .map(|c| format!("{} {} [{}]", "⚠".yellow(), c.conflict_type.render(), c.event.id))
        .collect::<Vec<_>>()
        .join("  ")
}
