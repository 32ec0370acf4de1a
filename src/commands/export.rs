use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use owo_colors::OwoColorize;
use pawsistente_core::ics::{ExportOptions, export_filename, generate_calendar, validate_events};

use crate::render::pluralize;
use crate::session::Session;

pub async fn run(session: &Session, output: Option<PathBuf>) -> Result<()> {
    let messages = session.language().messages();

    let mut events = session.manager.selected_events().to_vec();
    events.sort_by(|a, b| a.start.cmp(&b.start));

    let errors = validate_events(&events);
    if !errors.is_empty() {
        anyhow::bail!("Cannot export:\n  {}", errors.join("\n  "));
    }

    let options = ExportOptions::for_convention(&session.convention, &session.config.calendar_domain);
    let ics = generate_calendar(&events, &options)?;

    let path = output.unwrap_or_else(|| {
        PathBuf::from(export_filename(&session.convention.name, Utc::now().date_naive()))
    });
    tokio::fs::write(&path, ics)
        .await
        .with_context(|| format!("Could not write {}", path.display()))?;

    println!(
        "{}: {} ({} {})",
        messages.calendar_exported.green(),
        path.display(),
        events.len(),
        pluralize("event", events.len())
    );
    Ok(())
}
