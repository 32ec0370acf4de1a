use anyhow::Result;
use owo_colors::OwoColorize;
use pawsistente_core::Day;
use pawsistente_core::schedule::Phase;

use crate::session::Session;

pub fn run(session: &mut Session, days: Vec<String>, all: bool, clear: bool) -> Result<()> {
    let language = session.language();
    let messages = language.messages();

    if clear {
        session.manager.set_selected_days(Vec::new());
        session.manager.set_current_state(Phase::DaySelection);
    } else if all || !days.is_empty() {
        let days = if all {
            Day::ALL.to_vec()
        } else {
            days.iter()
                .map(|d| d.parse::<Day>())
                .collect::<Result<Vec<_>, _>>()?
        };

        session.manager.set_selected_days(days);
        session.manager.set_current_state(Phase::EventBrowsing);
    }

    let selected = session.manager.selected_days();
    if selected.is_empty() {
        println!("{}", messages.choose_days.bold());
        for day in Day::ALL {
            println!(
                "  {} {}  {}",
                day.abbreviation().dimmed(),
                day.name(language),
                session.convention.format_day_with_date(day, language).dimmed()
            );
        }
        println!("\n{}", messages.select_one_day.dimmed());
        return Ok(());
    }

    println!("{}", messages.selected_days.bold());
    for day in selected {
        println!(
            "  {} {}  {}",
            "✓".green(),
            day.name(language),
            session.convention.format_day_with_date(*day, language).dimmed()
        );
    }

    Ok(())
}
