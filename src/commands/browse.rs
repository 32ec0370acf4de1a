use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use dialoguer::Select;
use owo_colors::OwoColorize;
use pawsistente_core::conflict::get_conflicting_events;
use pawsistente_core::feed::{feed_cursors, group_by_time_slot, pending_events};
use pawsistente_core::schedule::Phase;

use crate::render::{conflict_block, event_card, progress_line};
use crate::session::Session;

enum Choice {
    Add,
    Skip,
    Finish,
}

pub async fn run(session: &mut Session) -> Result<()> {
    let language = session.language();
    let messages = language.messages();

    if session.manager.selected_days().is_empty() {
        anyhow::bail!(
            "{}.\n\nPick days first, e.g.:\n  pawsistente days friday saturday",
            messages.select_one_day
        );
    }

    println!("{}", messages.loading_events.dimmed());
    let events = session.load_events().await?;
    let pending = pending_events(&events, session.manager.snapshot());
    let groups = group_by_time_slot(&pending);

    session.manager.set_current_state(Phase::EventBrowsing);

    // Keep a live progress summary as decisions are saved
    let progress = Rc::new(Cell::new(session.manager.progress_summary()));
    let sink = Rc::clone(&progress);
    let subscription = session
        .manager
        .subscribe(move |state| sink.set(state.progress_summary()));

    let total = pending.len();
    let mut position = 0;
    let mut finished_early = false;

    for (group_index, event_index, event) in feed_cursors(&groups) {
        position += 1;
        session.manager.set_current_group_index(group_index);
        session.manager.set_current_event_index(event_index);

        println!();
        println!(
            "{}",
            format!("{} {}/{}", messages.event_of, position, total).dimmed()
        );
        println!("{}", event_card(event, &session.convention, language));

        let conflicts = get_conflicting_events(event, session.manager.selected_events());
        for line in conflict_block(&conflicts, language) {
            println!("{}", line);
        }
        println!();

        match prompt(language)? {
            Choice::Add => {
                session.manager.add_selected_event(event.clone());
                println!("  {}", messages.add_to_calendar.green());
            }
            Choice::Skip => {
                session.manager.remove_unseen_event(&event.id);
                session.manager.add_rejected_event(&event.id);
                println!("  {}", messages.skip_event.red());
            }
            Choice::Finish => {
                finished_early = true;
                break;
            }
        }
        println!("  {}", progress_line(&progress.get(), language).dimmed());
    }

    session.manager.unsubscribe(subscription);

    if !finished_early {
        println!("\n{}", messages.no_more_events.bold());
    }
    session.manager.set_current_state(Phase::Summary);

    println!("{}", progress_line(&session.manager.progress_summary(), language));

    Ok(())
}

fn prompt(language: pawsistente_core::Language) -> Result<Choice> {
    let messages = language.messages();
    let items = [
        messages.add_to_calendar,
        messages.skip_event,
        messages.finish_browsing,
    ];

    let selection = Select::new().items(&items).default(0).interact()?;

    Ok(match selection {
        0 => Choice::Add,
        1 => Choice::Skip,
        _ => Choice::Finish,
    })
}
