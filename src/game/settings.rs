use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::game::records::app_config_dir;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sfx_enabled: bool,
    /// Optional word list, one word or phrase per line.
    pub word_list: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sfx_enabled: true,
            word_list: None,
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    app_config_dir().map(|dir| dir.join("settings.json"))
}

impl Settings {
    pub fn load() -> Self {
        match settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|error| {
                log::warn!("Ignoring malformed settings file '{}'. Error: '{}'.", path.display(), error);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) {
        let result = settings_path()
            .ok_or(StoreError::NoConfigDir)
            .and_then(|path| self.save_to(&path));
        if let Err(error) = result {
            log::warn!("Unable to save settings. Error: '{}'.", error);
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
