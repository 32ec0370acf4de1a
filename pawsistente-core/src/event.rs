//! Convention event types.
//!
//! Events are produced by the schedule loader and are immutable afterwards,
//! except for the `is_selected` display flag which the feed derives from the
//! schedule state.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PawsError, PawsResult};
use crate::language::Language;

/// A convention schedule item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "EventRecord")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "startTime")]
    pub start: DateTime<Utc>,
    #[serde(rename = "endTime")]
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub location: String,

    // Optional details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    /// e.g. "Art", "Fursuit", "Social", "Educational"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_attendees: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panelist: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,

    pub day: Day,
    /// Local time label, e.g. "10:00-11:00"
    pub time_slot: String,

    /// Display-only; the schedule state is authoritative.
    #[serde(default)]
    pub is_selected: bool,
}

impl Event {
    /// Build an event with the required fields, rejecting inverted or empty intervals.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        day: Day,
        time_slot: impl Into<String>,
    ) -> PawsResult<Self> {
        let id = id.into();
        if start >= end {
            return Err(PawsError::InvalidEvent {
                id,
                reason: format!("start {} is not before end {}", start, end),
            });
        }

        Ok(Event {
            id,
            title: title.into(),
            description: String::new(),
            start,
            end,
            location: String::new(),
            room: None,
            track: None,
            difficulty: None,
            capacity: None,
            current_attendees: None,
            image_url: None,
            panelist: None,
            tags: Vec::new(),
            day,
            time_slot: time_slot.into(),
            is_selected: false,
        })
    }

    /// Build an event from RFC 3339 timestamp strings.
    pub fn from_rfc3339(
        id: impl Into<String>,
        title: impl Into<String>,
        start: &str,
        end: &str,
        day: Day,
        time_slot: impl Into<String>,
    ) -> PawsResult<Self> {
        Event::new(id, title, parse_timestamp(start)?, parse_timestamp(end)?, day, time_slot)
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Location with the room appended, as shown on cards and in exports.
    pub fn full_location(&self) -> String {
        match &self.room {
            Some(room) if !room.is_empty() => format!("{} - {}", self.location, room),
            _ => self.location.clone(),
        }
    }
}

/// Wire shape of an `Event`. Deserialization goes through `Event::new` so a
/// stored event with an inverted interval is rejected.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventRecord {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    #[serde(default)]
    location: String,
    #[serde(default)]
    room: Option<String>,
    #[serde(default)]
    track: Option<String>,
    #[serde(default)]
    difficulty: Option<Difficulty>,
    #[serde(default)]
    capacity: Option<u32>,
    #[serde(default)]
    current_attendees: Option<u32>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    panelist: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    day: Day,
    time_slot: String,
    #[serde(default)]
    is_selected: bool,
}

impl TryFrom<EventRecord> for Event {
    type Error = PawsError;

    fn try_from(record: EventRecord) -> PawsResult<Self> {
        let mut event = Event::new(
            record.id,
            record.title,
            record.start_time,
            record.end_time,
            record.day,
            record.time_slot,
        )?;

        event.description = record.description;
        event.location = record.location;
        event.room = record.room;
        event.track = record.track;
        event.difficulty = record.difficulty;
        event.capacity = record.capacity;
        event.current_attendees = record.current_attendees;
        event.image_url = record.image_url;
        event.panelist = record.panelist;
        event.tags = record.tags;
        event.is_selected = record.is_selected;
        Ok(event)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Parse an RFC 3339 timestamp into UTC.
pub fn parse_timestamp(s: &str) -> PawsResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| PawsError::DateParse(s.to_string()))
}

/// Convention day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 4] = [Day::Thursday, Day::Friday, Day::Saturday, Day::Sunday];

    /// Days since the first convention day.
    pub fn offset(&self) -> i64 {
        match self {
            Day::Thursday => 0,
            Day::Friday => 1,
            Day::Saturday => 2,
            Day::Sunday => 3,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Day::Thursday => "JUE",
            Day::Friday => "VIE",
            Day::Saturday => "SAB",
            Day::Sunday => "DOM",
        }
    }

    pub fn name(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, Day::Thursday) => "Thursday",
            (Language::En, Day::Friday) => "Friday",
            (Language::En, Day::Saturday) => "Saturday",
            (Language::En, Day::Sunday) => "Sunday",
            (Language::Es, Day::Thursday) => "Jueves",
            (Language::Es, Day::Friday) => "Viernes",
            (Language::Es, Day::Saturday) => "Sábado",
            (Language::Es, Day::Sunday) => "Domingo",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name(Language::En))
    }
}

impl FromStr for Day {
    type Err = PawsError;

    /// Accepts English or Spanish names and the short forms, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "thursday" | "thu" | "jueves" | "jue" => Ok(Day::Thursday),
            "friday" | "fri" | "viernes" | "vie" => Ok(Day::Friday),
            "saturday" | "sat" | "sábado" | "sabado" | "sab" => Ok(Day::Saturday),
            "sunday" | "sun" | "domingo" | "dom" => Ok(Day::Sunday),
            _ => Err(PawsError::UnknownDay(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    #[serde(rename = "All Levels")]
    AllLevels,
}
