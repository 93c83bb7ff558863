use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;

use crate::error::StoreError;

pub const HIGH_SCORE_KEY: &str = "velocitexto.highscore";

/// Per-user key/value integer storage.
pub trait Preferences {
    fn get_int(&self, key: &str) -> Result<Option<i64>, StoreError>;
    fn put_int(&mut self, key: &str, value: i64) -> Result<(), StoreError>;
}

pub(crate) fn app_config_dir() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("velocitexto");
    Some(path)
}

/// Flat JSON object of integers, one file per user account.
pub struct JsonPreferences {
    path: PathBuf,
}

impl JsonPreferences {
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_all(&self) -> Result<BTreeMap<String, i64>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(error) => Err(error.into()),
        }
    }
}

impl Preferences for JsonPreferences {
    fn get_int(&self, key: &str) -> Result<Option<i64>, StoreError> {
        Ok(self.read_all()?.get(key).copied())
    }

    fn put_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(StoreError::Json(error)) => {
                log::warn!(
                    "Overwriting unreadable preferences file '{}'. Error: '{}'.",
                    self.path.display(),
                    error
                );
                BTreeMap::new()
            }
            Err(error) => return Err(error),
        };
        values.insert(key.to_string(), value);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryPreferences {
    values: HashMap<String, i64>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Preferences for MemoryPreferences {
    fn get_int(&self, key: &str) -> Result<Option<i64>, StoreError> {
        Ok(self.values.get(key).copied())
    }

    fn put_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// The best final score ever reached, persisted through a [`Preferences`] backend.
///
/// Backend failures never reach the caller: reads fall back to the last value
/// seen in this process (0 if none) and writes are kept in memory only.
pub struct HighScoreStore {
    prefs: Box<dyn Preferences>,
    cached: Option<u32>,
}

impl HighScoreStore {
    pub fn new(prefs: Box<dyn Preferences>) -> Self {
        Self { prefs, cached: None }
    }

    pub fn open() -> Self {
        match app_config_dir() {
            Some(dir) => Self::new(Box::new(JsonPreferences::at(dir.join("preferences.json")))),
            None => {
                log::warn!("{} The high score will only last for this run.", StoreError::NoConfigDir);
                Self::in_memory()
            }
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryPreferences::new()))
    }

    pub fn load(&mut self) -> u32 {
        match self.prefs.get_int(HIGH_SCORE_KEY) {
            Ok(value) => {
                let value = value.map(clamp_score).unwrap_or(0);
                self.cached = Some(value);
                value
            }
            Err(error) => {
                log::warn!("Unable to read the high score, using the in-memory value. Error: '{}'.", error);
                self.cached.unwrap_or(0)
            }
        }
    }

    /// Overwrites the stored value. Negative values are stored as 0.
    pub fn save(&mut self, value: i64) {
        let value = clamp_score(value);
        self.cached = Some(value);
        if let Err(error) = self.prefs.put_int(HIGH_SCORE_KEY, value as i64) {
            log::warn!("Unable to persist the high score {}, keeping it in memory. Error: '{}'.", value, error);
        }
    }
}

fn clamp_score(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}
