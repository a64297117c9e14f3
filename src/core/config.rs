// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use directories::ProjectDirs;

use crate::generators::password::parse_length;

// Configuration for the CiberConsejos toolkit
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,

    // Preferences
    pub settings_dir: Option<PathBuf>,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,

            // Preferences
            settings_dir: None, // Will be initialized in load()

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Self::from_lookup(|key| env::var(key).ok());

        config.settings_dir = resolve_settings_dir(config.settings_dir.take());
        config
    }

    // Build from any key/value source; `load` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match parse_length(&val) {
                Some(length) => config.default_password_length = length,
                None => log::warn!("Invalid DEFAULT_PASSWORD_LENGTH '{}', using {}", val, config.default_password_length),
            }
        }

        // Preferences
        if let Some(dir) = lookup("SETTINGS_DIRECTORY") {
            config.settings_dir = Some(PathBuf::from(dir));
        }

        // Web Interface
        if let Some(val) = lookup("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown LOG_LEVEL '{}', using {}", level, config.log_level),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        config
    }

    pub fn settings_file(&self) -> Option<PathBuf> {
        self.settings_dir.as_ref().map(|dir| dir.join("settings.json"))
    }
}

// SETTINGS_DIRECTORY wins; otherwise the per-user config dir. Nothing is
// created here, saving preferences creates the directory on demand.
fn resolve_settings_dir(configured: Option<PathBuf>) -> Option<PathBuf> {
    configured.or_else(|| match ProjectDirs::from("org", "ciberconsejos", "ciberconsejos") {
        Some(dirs) => Some(dirs.config_dir().to_path_buf()),
        None => {
            log::warn!("No home directory found, preferences will not be saved");
            None
        }
    })
}
