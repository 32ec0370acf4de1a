use anyhow::{Context, Result};
use pawsistente_core::config::PawsConfig;
use pawsistente_core::convention::Convention;
use pawsistente_core::loader::{parse_schedule, schedule_candidates};
use pawsistente_core::schedule::{FileStorage, ScheduleStateManager};
use pawsistente_core::{Event, Language};
use tracing::debug;

/// Everything a command needs: config, convention calendar and the user's state.
pub struct Session {
    pub config: PawsConfig,
    pub convention: Convention,
    pub manager: ScheduleStateManager<FileStorage>,
}

impl Session {
    pub fn open() -> Result<Self> {
        let config = PawsConfig::load().context("Could not load configuration")?;
        let convention = config.convention()?;
        let storage = FileStorage::new(config.data_path());
        let manager = ScheduleStateManager::create(storage);

        Ok(Session {
            config,
            convention,
            manager,
        })
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    /// Read the schedule for the configured language, falling back to Spanish.
    pub async fn load_events(&self) -> Result<Vec<Event>> {
        let dir = self.config.schedule_path();
        let candidates = schedule_candidates(&dir, self.language());

        for path in &candidates {
            match tokio::fs::read_to_string(path).await {
                Ok(text) => {
                    let events = parse_schedule(&text, &self.convention)
                        .with_context(|| format!("Could not parse {}", path.display()))?;
                    debug!(path = %path.display(), count = events.len(), "Loaded schedule");
                    return Ok(events);
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(e).with_context(|| format!("Could not read {}", path.display()));
                }
            }
        }

        anyhow::bail!(
            "No schedule found.\n\n\
            Put the convention schedule CSV at:\n  \
            {}",
            candidates[0].display()
        );
    }

    /// Find an event by id among the loaded schedule, then the saved selection.
    pub async fn find_event(&self, id: &str) -> Result<Event> {
        if let Some(event) = self.manager.selected_events().iter().find(|e| e.id == id) {
            return Ok(event.clone());
        }

        let events = self.load_events().await?;
        events
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| anyhow::anyhow!("Event '{}' not found in the schedule", id))
    }

    pub fn close(self) {
        drop(self.manager.dispose());
    }
}
