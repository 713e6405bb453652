use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::models::Settings;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "io error: {err}"),
            ConfigError::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        ConfigError::Json(value)
    }
}

/// Read-only view of the app config directory. Task data is never written here.
pub struct Config {
    root: PathBuf,
}

impl Config {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    pub fn read_settings(&self) -> Result<Settings, ConfigError> {
        let settings: Settings = read_json(&self.settings_path())?;
        Ok(settings.normalized())
    }

    /// Missing file means defaults; a malformed one is logged and ignored.
    pub fn load_settings(&self) -> Settings {
        match self.read_settings() {
            Ok(settings) => settings,
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!(
                    "config: no settings file at {}, using defaults",
                    self.settings_path().display()
                );
                Settings::default()
            }
            Err(err) => {
                log::warn!(
                    "config: ignoring unreadable settings file {}: {err}",
                    self.settings_path().display()
                );
                Settings::default()
            }
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let mut file = File::open(path)?;
    let mut buf = String::new();
    file.read_to_string(&mut buf)?;
    Ok(serde_json::from_str(&buf)?)
}
