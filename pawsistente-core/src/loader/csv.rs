//! Schedule CSV parsing.
//!
//! Expected columns, with a header row:
//! `day,start_time,end_time,location,title,hosted_by,category,description`

use chrono::{Duration, NaiveTime};
use tracing::debug;

use crate::convention::Convention;
use crate::error::{PawsError, PawsResult};
use crate::event::{Day, Event};

const COLUMN_COUNT: usize = 8;

/// One row of the schedule sheet, trimmed.
#[derive(Debug, Clone, PartialEq)]
struct ScheduleRow {
    day: String,
    start_time: String,
    end_time: String,
    location: String,
    title: String,
    hosted_by: String,
    category: String,
    description: String,
}

/// Parse a schedule CSV into events. Rows that cannot be turned into an
/// event are skipped; an input without a header row is an error.
pub fn parse_schedule(text: &str, convention: &Convention) -> PawsResult<Vec<Event>> {
    let mut lines = text.trim().lines();

    let header = lines
        .next()
        .filter(|h| !h.trim().is_empty())
        .ok_or_else(|| PawsError::CsvParse("schedule is empty".into()))?;
    let header_len = split_line(header).len();
    if header_len != COLUMN_COUNT {
        return Err(PawsError::CsvParse(format!(
            "expected {} columns in header, found {}",
            COLUMN_COUNT, header_len
        )));
    }

    let mut events = Vec::new();

    // Row indices count the header as 0 so ids line up with spreadsheet rows
    for (index, line) in lines.enumerate().map(|(i, l)| (i + 1, l)) {
        if line.trim().is_empty() {
            continue;
        }

        let values = split_line(line);
        if values.len() != COLUMN_COUNT {
            debug!(row = index, columns = values.len(), "Skipping malformed schedule row");
            continue;
        }

        let row = ScheduleRow {
            day: values[0].trim().to_string(),
            start_time: values[1].trim().to_string(),
            end_time: values[2].trim().to_string(),
            location: values[3].trim().to_string(),
            title: values[4].trim().to_string(),
            hosted_by: values[5].trim().to_string(),
            category: values[6].trim().to_string(),
            description: values[7].trim().to_string(),
        };

        if row.title.is_empty() {
            continue;
        }

        match row_to_event(&row, index, convention) {
            Ok(event) => events.push(event),
            Err(e) => debug!(row = index, error = %e, "Skipping schedule row"),
        }
    }

    Ok(events)
}

/// Split on commas outside double quotes. Enclosing quotes are dropped and
/// `""` inside a quoted field is a literal quote.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim_end_matches('\r').chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn row_to_event(row: &ScheduleRow, index: usize, convention: &Convention) -> PawsResult<Event> {
    let day: Day = row.day.parse()?;
    let start_local = parse_time(&row.start_time)?;
    let end_local = parse_time(&row.end_time)?;

    let start = convention.local_datetime(day, start_local)?;
    let mut end = convention.local_datetime(day, end_local)?;
    // Late-night panels run past midnight
    if end <= start {
        end += Duration::days(1);
    }

    let time_slot = format!("{}-{}", start_local.format("%H:%M"), end_local.format("%H:%M"));
    let mut event = Event::new(format!("event_{}", index), &row.title, start, end, day, time_slot)?;

    event.description = row.description.clone();
    event.location = row.location.clone();
    if !row.hosted_by.is_empty() {
        event.panelist = Some(row.hosted_by.clone());
    }
    if !row.category.is_empty() {
        event.track = Some(row.category.clone());
        event.tags = vec![row.category.clone()];
    }

    Ok(event)
}

/// Accepts "03:00:00 PM", "3:00 pm" and 24-hour "15:00" / "15:00:00".
fn parse_time(s: &str) -> PawsResult<NaiveTime> {
    let normalized = s.trim().to_uppercase();
    const FORMATS: [&str; 5] = ["%I:%M:%S %p", "%I:%M:%S%p", "%I:%M %p", "%H:%M:%S", "%H:%M"];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&normalized, fmt).ok())
        .ok_or_else(|| PawsError::DateParse(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const HEADER: &str = "day,start_time,end_time,location,title,hosted_by,category,description";

    #[test]
    fn test_parse_schedule_builds_events() {
        let csv = format!(
            "{}\nThursday,03:00:00 PM,04:30:00 PM,Salón A,Drawing paws,Team Art,Art,\"Bring pencils, paper\"\n",
            HEADER
        );

        let events = parse_schedule(&csv, &Convention::default()).unwrap();

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.id, "event_1");
        assert_eq!(event.day, Day::Thursday);
        assert_eq!(event.start, Utc.with_ymd_and_hms(2025, 10, 23, 21, 0, 0).unwrap());
        assert_eq!(event.end, Utc.with_ymd_and_hms(2025, 10, 23, 22, 30, 0).unwrap());
        assert_eq!(event.time_slot, "15:00-16:30");
        assert_eq!(event.description, "Bring pencils, paper");
        assert_eq!(event.panelist.as_deref(), Some("Team Art"));
        assert_eq!(event.track.as_deref(), Some("Art"));
        assert!(!event.is_selected);
    }

    #[test]
    fn test_parse_schedule_skips_bad_rows() {
        let csv = [
            HEADER,
            "Monday,10:00,11:00,Hall,Wrong day,,,",
            "Friday,10:00,11:00,Hall,,,,no title",
            "Friday,ten,11:00,Hall,Bad time,,,",
            "Friday,10:00,11:00,Hall,Too few columns",
            "",
            "Friday,10:00,11:00,Hall,Good one,,,",
        ]
        .join("\n");

        let events = parse_schedule(&csv, &Convention::default()).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Good one");
        assert_eq!(events[0].id, "event_6", "ids follow the row position");
        assert_eq!(events[0].panelist, None);
        assert!(events[0].tags.is_empty());
    }

    #[test]
    fn test_parse_schedule_rolls_end_past_midnight() {
        let csv = format!("{}\nSaturday,11:00:00 PM,01:00:00 AM,Hall,Night dance,,,\n", HEADER);

        let events = parse_schedule(&csv, &Convention::default()).unwrap();

        assert_eq!(events[0].duration_minutes(), 120);
        assert_eq!(events[0].time_slot, "23:00-01:00");
    }

    #[test]
    fn test_parse_schedule_rejects_missing_header() {
        assert!(parse_schedule("", &Convention::default()).is_err());
        assert!(parse_schedule("day,title\nThursday,x", &Convention::default()).is_err());
    }

    #[test]
    fn test_parse_time_formats() {
        let three_pm = NaiveTime::from_hms_opt(15, 0, 0).unwrap();
        assert_eq!(parse_time("03:00:00 PM").unwrap(), three_pm);
        assert_eq!(parse_time("3:00 pm").unwrap(), three_pm);
        assert_eq!(parse_time("15:00").unwrap(), three_pm);
        assert_eq!(parse_time("12:00:00 AM").unwrap(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert!(parse_time("noonish").is_err());
    }

    #[test]
    fn test_split_line_honors_quotes() {
        assert_eq!(split_line("a,\"b,c\",d"), vec!["a", "b,c", "d"]);
        assert_eq!(split_line("a,,\r"), vec!["a", "", ""]);
        assert_eq!(
            split_line(r#"Friday,"The ""Big"" Show",x"#),
            vec!["Friday", r#"The "Big" Show"#, "x"]
        );
    }
}
