use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run(session: &mut Session, navigation_only: bool, yes: bool) -> Result<()> {
    let messages = session.language().messages();

    if navigation_only {
        session.manager.reset_navigation();
        println!("{}", "Back to day selection".green());
        return Ok(());
    }

    if !session.manager.has_progress() {
        println!("{}", messages.no_events_selected.dimmed());
        return Ok(());
    }

    let confirmed = yes
        || Confirm::new()
            .with_prompt("  Clear all selected days and events?")
            .default(false)
            .interact()?;

    if confirmed {
        session.manager.clear_state();
        println!("{}", messages.progress_cleared.green());
    }

    Ok(())
}
