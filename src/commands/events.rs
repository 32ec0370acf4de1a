use anyhow::Result;
use owo_colors::OwoColorize;
use pawsistente_core::Day;
use pawsistente_core::feed::{group_by_time_slot, mark_selected, search_events};

use crate::render::event_line;
use crate::session::Session;

pub async fn run(session: &Session, search: Option<String>, day: Option<String>) -> Result<()> {
    let language = session.language();
    let mut events = session.load_events().await?;
    mark_selected(&mut events, session.manager.snapshot());

    let days = match day {
        Some(d) => vec![d.parse::<Day>()?],
        None => Vec::new(),
    };
    let matches: Vec<_> = search_events(&events, search.as_deref().unwrap_or(""), &days)
        .into_iter()
        .cloned()
        .collect();

    if matches.is_empty() {
        println!("{}", "No matching events".dimmed());
        return Ok(());
    }

    let mut current_day = None;
    for group in group_by_time_slot(&matches) {
        let day = group.events[0].day;
        if current_day != Some(day) {
            if current_day.is_some() {
                println!();
            }
            println!(
                "{} {}",
                day.name(language).bold(),
                session.convention.format_day_with_date(day, language).dimmed()
            );
            current_day = Some(day);
        }

        for event in &group.events {
            println!("  {}", event_line(event));
        }
    }

    Ok(())
}
