//! Interface language and the translated strings the front end shows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PawsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Language::Es => &SPANISH,
            Language::En => &ENGLISH,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = PawsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" | "spanish" | "español" => Ok(Language::Es),
            "en" | "english" => Ok(Language::En),
            _ => Err(PawsError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Strings shown by the front end.
pub struct Messages {
    pub choose_days: &'static str,
    pub select_one_day: &'static str,
    pub selected_days: &'static str,
    pub loading_events: &'static str,
    pub no_more_events: &'static str,
    pub event_of: &'static str,
    pub add_to_calendar: &'static str,
    pub skip_event: &'static str,
    pub finish_browsing: &'static str,
    pub hosted_by: &'static str,
    pub category: &'static str,
    pub your_schedule: &'static str,
    pub events_selected: &'static str,
    pub no_events_selected: &'static str,
    pub calendar_exported: &'static str,
    pub no_description_available: &'static str,
    pub conflict_warning: &'static str,
    pub selected: &'static str,
    pub skipped: &'static str,
    pub review_skipped: &'static str,
    pub progress_cleared: &'static str,
}

static SPANISH: Messages = Messages {
    choose_days: "Elige tus días",
    select_one_day: "Selecciona al menos un día",
    selected_days: "Días seleccionados",
    loading_events: "Cargando eventos...",
    no_more_events: "¡No hay más eventos!",
    event_of: "Evento",
    add_to_calendar: "Agregar al calendario",
    skip_event: "Saltar evento",
    finish_browsing: "Terminar",
    hosted_by: "Presentado por",
    category: "Categoría",
    your_schedule: "Tu agenda",
    events_selected: "eventos seleccionados",
    no_events_selected: "Aún no has seleccionado eventos",
    calendar_exported: "Calendario exportado",
    no_description_available: "Sin descripción disponible",
    conflict_warning: "Conflicto de horario",
    selected: "Seleccionados",
    skipped: "Saltados",
    review_skipped: "Eventos saltados de vuelta en la lista",
    progress_cleared: "Progreso borrado",
};

static ENGLISH: Messages = Messages {
    choose_days: "Choose your days",
    select_one_day: "Select at least one day",
    selected_days: "Selected days",
    loading_events: "Loading events...",
    no_more_events: "No more events!",
    event_of: "Event",
    add_to_calendar: "Add to calendar",
    skip_event: "Skip event",
    finish_browsing: "Finish",
    hosted_by: "Hosted by",
    category: "Category",
    your_schedule: "Your schedule",
    events_selected: "events selected",
    no_events_selected: "You haven't selected any events yet",
    calendar_exported: "Calendar exported",
    no_description_available: "No description available",
    conflict_warning: "Schedule conflict",
    selected: "Selected",
    skipped: "Skipped",
    review_skipped: "Skipped events are back in the feed",
    progress_cleared: "Progress cleared",
};
