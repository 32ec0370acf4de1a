//! Single add / skip / remove decisions by event id.

use anyhow::Result;
use owo_colors::OwoColorize;
use pawsistente_core::conflict::get_conflicting_events;

use crate::render::{conflict_block, progress_line};
use crate::session::Session;

pub async fn add(session: &mut Session, id: &str) -> Result<()> {
    let language = session.language();
    let event = session.find_event(id).await?;

    let conflicts = get_conflicting_events(&event, session.manager.selected_events());

    if session.manager.add_selected_event(event.clone()) {
        println!("{} {}", "+".green(), event.title.green());
        for line in conflict_block(&conflicts, language) {
            println!("{}", line);
        }
    } else {
        println!("{} {}", "=".dimmed(), format!("{} (already selected)", event.title).dimmed());
    }

    println!("{}", progress_line(&session.manager.progress_summary(), language));
    Ok(())
}

pub async fn skip(session: &mut Session, id: &str) -> Result<()> {
    let language = session.language();
    let event = session.find_event(id).await?;

    session.manager.remove_unseen_event(&event.id);
    session.manager.add_rejected_event(&event.id);

    println!("{} {}", "-".red(), event.title.red());
    println!("{}", progress_line(&session.manager.progress_summary(), language));
    Ok(())
}

pub fn remove(session: &mut Session, id: &str) -> Result<()> {
    let language = session.language();

    let Some(event) = session
        .manager
        .selected_events()
        .iter()
        .find(|e| e.id == id)
        .cloned()
    else {
        anyhow::bail!("Event '{}' is not in your schedule", id);
    };

    session.manager.remove_selected_event(&event.id);

    println!("{} {}", "-".red(), event.title.red());
    println!("{}", progress_line(&session.manager.progress_summary(), language));
    Ok(())
}
