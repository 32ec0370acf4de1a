//! Convention dates and time zone.
//!
//! Schedule files only name the weekday, so every local time is resolved
//! against the convention's first day (a Thursday) in its time zone.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::constants::{DEFAULT_CONVENTION_NAME, DEFAULT_CONVENTION_START, DEFAULT_TIMEZONE};
use crate::error::{PawsError, PawsResult};
use crate::event::Day;
use crate::language::Language;

#[derive(Debug, Clone)]
pub struct Convention {
    pub name: String,
    /// Date of the Thursday the convention opens on
    pub start_date: NaiveDate,
    pub timezone: Tz,
}

impl Default for Convention {
    fn default() -> Self {
        Convention {
            name: DEFAULT_CONVENTION_NAME.to_string(),
            start_date: NaiveDate::parse_from_str(DEFAULT_CONVENTION_START, "%Y-%m-%d")
                .unwrap_or(NaiveDate::MIN),
            timezone: DEFAULT_TIMEZONE.parse().unwrap_or(chrono_tz::UTC),
        }
    }
}

impl Convention {
    pub fn new(name: &str, start_date: &str, timezone: &str) -> PawsResult<Self> {
        let start_date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
            .map_err(|_| PawsError::Config(format!("Invalid convention start date '{}'", start_date)))?;
        let timezone: Tz = timezone
            .parse()
            .map_err(|_| PawsError::Config(format!("Unknown time zone '{}'", timezone)))?;

        Ok(Convention {
            name: name.to_string(),
            start_date,
            timezone,
        })
    }

    pub fn date_for(&self, day: Day) -> NaiveDate {
        self.start_date + Duration::days(day.offset())
    }

    /// Resolve a local wall-clock time on a convention day to an instant.
    /// Ambiguous times (DST fall-back) resolve to the earlier instant.
    pub fn local_datetime(&self, day: Day, time: NaiveTime) -> PawsResult<DateTime<Utc>> {
        let naive = self.date_for(day).and_time(time);

        match self.timezone.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
            LocalResult::None => Err(PawsError::DateParse(format!(
                "{} does not exist in {}",
                naive, self.timezone
            ))),
        }
    }

    /// "HH:MM" in convention local time.
    pub fn local_time_label(&self, dt: &DateTime<Utc>) -> String {
        dt.with_timezone(&self.timezone).format("%H:%M").to_string()
    }

    /// "23 de Octubre" / "23 de October"
    pub fn format_day_with_date(&self, day: Day, language: Language) -> String {
        let date = self.date_for(day);
        format!("{} de {}", date.day(), month_name(date.month(), language))
    }

    /// "Jueves 23 Octubre 2025" in convention local time
    pub fn format_event_date(&self, dt: &DateTime<Utc>, language: Language) -> String {
        let local = dt.with_timezone(&self.timezone);
        format!(
            "{} {} {} {}",
            weekday_name(local.weekday(), language),
            local.day(),
            month_name(local.month(), language),
            local.year()
        )
    }
}

fn weekday_name(weekday: chrono::Weekday, language: Language) -> &'static str {
    use chrono::Weekday::*;
    match (language, weekday) {
        (Language::Es, Mon) => "Lunes",
        (Language::Es, Tue) => "Martes",
        (Language::Es, Wed) => "Miércoles",
        (Language::Es, Thu) => "Jueves",
        (Language::Es, Fri) => "Viernes",
        (Language::Es, Sat) => "Sábado",
        (Language::Es, Sun) => "Domingo",
        (Language::En, Mon) => "Monday",
        (Language::En, Tue) => "Tuesday",
        (Language::En, Wed) => "Wednesday",
        (Language::En, Thu) => "Thursday",
        (Language::En, Fri) => "Friday",
        (Language::En, Sat) => "Saturday",
        (Language::En, Sun) => "Sunday",
    }
}

fn month_name(month: u32, language: Language) -> &'static str {
    const ES: [&str; 12] = [
        "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio", "Julio", "Agosto", "Septiembre",
        "Octubre", "Noviembre", "Diciembre",
    ];
    const EN: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];

    let idx = (month.clamp(1, 12) - 1) as usize;
    match language {
        Language::Es => ES[idx],
        Language::En => EN[idx],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_map_to_consecutive_dates() {
        let convention = Convention::default();
        assert_eq!(convention.date_for(Day::Thursday), NaiveDate::from_ymd_opt(2025, 10, 23).unwrap());
        assert_eq!(convention.date_for(Day::Sunday), NaiveDate::from_ymd_opt(2025, 10, 26).unwrap());
    }

    #[test]
    fn test_local_datetime_converts_to_utc() {
        let convention = Convention::default();
        let time = NaiveTime::from_hms_opt(10, 0, 0).unwrap();

        let dt = convention.local_datetime(Day::Thursday, time).unwrap();

        // Mexico City is UTC-6 with no DST
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 10, 23, 16, 0, 0).unwrap());
        assert_eq!(convention.local_time_label(&dt), "10:00");
    }

    #[test]
    fn test_format_day_with_date() {
        let convention = Convention::default();
        assert_eq!(convention.format_day_with_date(Day::Friday, Language::Es), "24 de Octubre");
        assert_eq!(convention.format_day_with_date(Day::Friday, Language::En), "24 de October");
    }

    #[test]
    fn test_format_event_date_uses_local_weekday() {
        let convention = Convention::default();
        // 03:00 UTC on the 24th is still Thursday evening in Mexico City
        let dt = Utc.with_ymd_and_hms(2025, 10, 24, 3, 0, 0).unwrap();

        assert_eq!(convention.format_event_date(&dt, Language::Es), "Jueves 23 Octubre 2025");
        assert_eq!(convention.format_event_date(&dt, Language::En), "Thursday 23 October 2025");
    }

    #[test]
    fn test_new_rejects_unknown_timezone() {
        assert!(Convention::new("Test", "2025-10-23", "Mars/Olympus").is_err());
        assert!(Convention::new("Test", "23/10/2025", "UTC").is_err());
    }
}
