//! iCalendar export of a personal schedule.

use chrono::{DateTime, NaiveDate, Utc};
use icalendar::{Calendar, Component, EventLike, Property};

use crate::convention::Convention;
use crate::error::{PawsError, PawsResult};
use crate::event::Event;

const PRODID: &str = "-//Pawsistente//Event Calendar//EN";

/// Calendar-level metadata for an export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub calendar_name: String,
    pub calendar_description: String,
    /// IANA zone advertised to calendar apps (X-WR-TIMEZONE)
    pub timezone: String,
    /// Right-hand side of every UID
    pub domain: String,
    /// DTSTAMP for every event
    pub generated_at: DateTime<Utc>,
}

impl ExportOptions {
    pub fn for_convention(convention: &Convention, domain: &str) -> Self {
        ExportOptions {
            calendar_name: format!("{} - Selected Events", convention.name),
            calendar_description: format!("Events selected for {}", convention.name),
            timezone: convention.timezone.name().to_string(),
            domain: domain.to_string(),
            generated_at: Utc::now(),
        }
    }
}

/// Render the selected events as one VCALENDAR document.
pub fn generate_calendar(events: &[Event], options: &ExportOptions) -> PawsResult<String> {
    let errors = validate_events(events);
    if !errors.is_empty() {
        return Err(PawsError::IcsGenerate(errors.join("; ")));
    }

    let mut cal = Calendar::new();
    cal.name(&options.calendar_name);
    cal.description(&options.calendar_description);
    cal.timezone(options.timezone.as_str());
    cal.append_property(Property::new("METHOD", "PUBLISH"));

    let dtstamp = format_utc(&options.generated_at);

    for event in events {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&format!("pawsistente-{}@{}", event.id, options.domain));
        ics_event.add_property("DTSTAMP", &dtstamp);
        ics_event.add_property("DTSTART", format_utc(&event.start));
        ics_event.add_property("DTEND", format_utc(&event.end));
        ics_event.summary(&event.title);

        if !event.description.is_empty() {
            ics_event.description(&event.description);
        }

        let location = event.full_location();
        if !location.is_empty() {
            ics_event.location(&location);
        }

        ics_event.add_property("STATUS", "CONFIRMED");
        ics_event.add_property("TRANSP", "OPAQUE");
        ics_event.add_property("CATEGORIES", event.track.as_deref().unwrap_or("General"));

        cal.push(ics_event.done());
    }

    let cal = cal.done();
    Ok(rewrite_prodid(&cal.to_string()))
}

/// Problems that make a selection unexportable. Empty means OK.
pub fn validate_events(events: &[Event]) -> Vec<String> {
    let mut errors = Vec::new();

    if events.is_empty() {
        errors.push("No events selected for export".to_string());
    }

    for (index, event) in events.iter().enumerate() {
        if event.title.trim().is_empty() {
            errors.push(format!("Event {}: Missing title", index + 1));
        }
        if event.start >= event.end {
            errors.push(format!("Event {}: Ends before it starts", index + 1));
        }
    }

    errors
}

/// "confuror-2025-events-2025-10-19.ics"
pub fn export_filename(convention_name: &str, date: NaiveDate) -> String {
    let slug: String = convention_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    format!("{}-events-{}.ics", slug, date.format("%Y-%m-%d"))
}

fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// The icalendar crate stamps its own PRODID; advertise ours instead.
fn rewrite_prodid(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
        } else {
            result.push_str(line);
        }
        result.push_str("\r\n");
    }

    result
}
