use anyhow::Result;
use owo_colors::OwoColorize;
use pawsistente_core::schedule::Phase;

use crate::render::pluralize;
use crate::session::Session;

/// Put every skipped event back into the browsing feed.
pub fn run(session: &mut Session) -> Result<()> {
    let messages = session.language().messages();

    let moved = session.manager.move_rejected_to_unseen();
    if moved == 0 {
        println!("{}", "Nothing to review".dimmed());
        return Ok(());
    }

    session.manager.set_current_state(Phase::EventBrowsing);
    println!(
        "{} ({} {})",
        messages.review_skipped.green(),
        moved,
        pluralize("event", moved)
    );
    Ok(())
}
