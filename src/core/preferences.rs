// src/core/preferences.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::generators::password::clamp_length;
use crate::models::PasswordGenerationOptions;

#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("No settings directory available")]
    NoSettingsDirectory,
}

pub type Result<T> = std::result::Result<T, PreferencesError>;

/// Generator toggles remembered between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self::from(&PasswordGenerationOptions::default())
    }
}

impl From<&PasswordGenerationOptions> for Preferences {
    fn from(options: &PasswordGenerationOptions) -> Self {
        Self {
            length: options.length,
            uppercase: options.include_uppercase,
            lowercase: options.include_lowercase,
            digits: options.include_numbers,
            symbols: options.include_symbols,
        }
    }
}

impl Preferences {
    pub fn with_default_length(length: usize) -> Self {
        Self { length: clamp_length(Some(length)), ..Self::default() }
    }

    pub fn to_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: clamp_length(Some(self.length)),
            include_uppercase: self.uppercase,
            include_lowercase: self.lowercase,
            include_numbers: self.digits,
            include_symbols: self.symbols,
        }
    }

    /// How many categories are switched on.
    pub fn enabled_count(&self) -> usize {
        [self.uppercase, self.lowercase, self.digits, self.symbols]
            .into_iter()
            .filter(|enabled| *enabled)
            .count()
    }
}

/// Reads and writes preferences as JSON in a single file.
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &crate::core::config::Config) -> Result<Self> {
        config
            .settings_file()
            .map(Self::new)
            .ok_or(PreferencesError::NoSettingsDirectory)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means defaults; a broken one is an error.
    pub fn load_or(&self, defaults: Preferences) -> Result<Preferences> {
        if !self.path.exists() {
            log::debug!("No settings file at {}, using defaults", self.path.display());
            return Ok(defaults);
        }

        let content = fs::read_to_string(&self.path)?;
        let mut preferences: Preferences = serde_json::from_str(&content)?;
        preferences.length = clamp_length(Some(preferences.length));
        Ok(preferences)
    }

    pub fn save(&self, preferences: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(preferences)?;
        fs::write(&self.path, json)?;
        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    pub fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
