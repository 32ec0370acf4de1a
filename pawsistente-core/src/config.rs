//! Global pawsistente configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CALENDAR_DOMAIN, DEFAULT_CONVENTION_NAME, DEFAULT_CONVENTION_START, DEFAULT_TIMEZONE,
};
use crate::convention::Convention;
use crate::error::{PawsError, PawsResult};
use crate::language::Language;

static DEFAULT_DATA_DIR: &str = "~/.pawsistente";
static DEFAULT_SCHEDULE_DIR: &str = "~/.pawsistente/schedules";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_schedule_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SCHEDULE_DIR)
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_convention_name() -> String {
    DEFAULT_CONVENTION_NAME.to_string()
}

fn default_convention_start() -> String {
    DEFAULT_CONVENTION_START.to_string()
}

fn default_calendar_domain() -> String {
    DEFAULT_CALENDAR_DOMAIN.to_string()
}

/// Configuration at ~/.config/pawsistente/config.toml
///
/// Every key can be overridden from the environment, e.g. `PAWSISTENTE_LANGUAGE=en`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PawsConfig {
    /// Where the schedule state is stored
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory holding schedule.csv / schedule_english.csv
    #[serde(default = "default_schedule_dir")]
    pub schedule_dir: PathBuf,

    #[serde(default)]
    pub language: Language,

    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default = "default_convention_name")]
    pub convention_name: String,

    /// Date of the opening Thursday, YYYY-MM-DD
    #[serde(default = "default_convention_start")]
    pub convention_start: String,

    #[serde(default = "default_calendar_domain")]
    pub calendar_domain: String,
}

impl Default for PawsConfig {
    fn default() -> Self {
        PawsConfig {
            data_dir: default_data_dir(),
            schedule_dir: default_schedule_dir(),
            language: Language::default(),
            timezone: default_timezone(),
            convention_name: default_convention_name(),
            convention_start: default_convention_start(),
            calendar_domain: default_calendar_domain(),
        }
    }
}

impl PawsConfig {
    pub fn config_path() -> PawsResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PawsError::Config("Could not determine config directory".into()))?
            .join("pawsistente");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config, creating a commented default file on first run.
    pub fn load() -> PawsResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> PawsResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("PAWSISTENTE"))
            .build()
            .map_err(|e| PawsError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PawsError::Config(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> PawsResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| PawsError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| PawsError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PawsResult<()> {
        let contents = format!(
            "\
# pawsistente configuration

# Where your schedule progress is saved:
# data_dir = \"{}\"

# Where the convention schedule CSV files live:
# schedule_dir = \"{}\"

# Interface language (\"es\" or \"en\"):
# language = \"es\"

# Convention details:
# convention_name = \"{}\"
# convention_start = \"{}\"
# timezone = \"{}\"
",
            DEFAULT_DATA_DIR,
            DEFAULT_SCHEDULE_DIR,
            DEFAULT_CONVENTION_NAME,
            DEFAULT_CONVENTION_START,
            DEFAULT_TIMEZONE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PawsError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PawsError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        expand(&self.data_dir)
    }

    pub fn schedule_path(&self) -> PathBuf {
        expand(&self.schedule_dir)
    }

    pub fn convention(&self) -> PawsResult<Convention> {
        Convention::new(&self.convention_name, &self.convention_start, &self.timezone)
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PawsConfig::load_from(&dir.path().join("nope.toml")).unwrap();

        assert_eq!(config.language, Language::Es);
        assert_eq!(config.timezone, "America/Mexico_City");
        assert_eq!(config.data_dir, PathBuf::from("~/.pawsistente"));
    }

    #[test]
    fn test_default_config_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pawsistente/config.toml");

        PawsConfig::create_default_config(&path).unwrap();
        let config = PawsConfig::load_from(&path).unwrap();

        assert_eq!(config.convention_name, "Confuror 2025");
        assert!(config.convention().is_ok());
    }

    #[test]
    fn test_saved_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = PawsConfig {
            language: Language::En,
            convention_name: "Paw Con".to_string(),
            ..PawsConfig::default()
        };

        config.save(&path).unwrap();
        let loaded = PawsConfig::load_from(&path).unwrap();

        assert_eq!(loaded.language, Language::En);
        assert_eq!(loaded.convention_name, "Paw Con");
    }
}
