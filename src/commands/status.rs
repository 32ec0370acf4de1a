use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::{Render, progress_line};
use crate::session::Session;

pub fn run(session: &Session) -> Result<()> {
    let language = session.language();
    let manager = &session.manager;

    println!("{} {}", session.convention.name.bold(), manager.current_state().render());

    if !manager.has_progress() {
        println!("{}", language.messages().no_events_selected.dimmed());
        return Ok(());
    }

    let days: Vec<&str> = manager.selected_days().iter().map(|d| d.name(language)).collect();
    if !days.is_empty() {
        println!("{}", days.join(", "));
    }

    println!("{}", progress_line(&manager.progress_summary(), language));
    if !manager.unseen_events().is_empty() {
        println!(
            "{}",
            format!("{} skipped events queued for review", manager.unseen_events().len()).dimmed()
        );
    }
    println!(
        "{}",
        format!("Last updated {}", manager.last_updated().format("%Y-%m-%d %H:%M UTC")).dimmed()
    );

    Ok(())
}
