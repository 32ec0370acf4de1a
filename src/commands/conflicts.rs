use anyhow::Result;
use owo_colors::OwoColorize;
use pawsistente_core::conflict::get_conflicting_events;

use crate::render::{conflict_block, event_line};
use crate::session::Session;

pub async fn run(session: &Session, id: &str) -> Result<()> {
    let event = session.find_event(id).await?;
    let conflicts = get_conflicting_events(&event, session.manager.selected_events());

    println!("{}", event_line(&event));

    if conflicts.is_empty() {
        println!("  {}", "No conflicts with your schedule".green());
    } else {
        for line in conflict_block(&conflicts, session.language()) {
            println!("{}", line);
        }
    }

    Ok(())
}
