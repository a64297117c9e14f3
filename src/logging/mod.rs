// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use log::LevelFilter;

use crate::core::config::Config;

/// Where log lines end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

/// Install the global logger: the configured file if any, stderr otherwise.
/// `RUST_LOG` still overrides the configured level.
pub fn init(config: &Config, verbose: bool) -> io::Result<LogTarget> {
    let level = if verbose { LevelFilter::Debug } else { config.log_level };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(true)
        .parse_env("RUST_LOG");

    let target = match &config.log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            LogTarget::File
        }
        None => {
            builder.target(env_logger::Target::Stderr);
            LogTarget::Stderr
        }
    };

    // A logger may already be installed (tests, embedding); keep it.
    if let Err(e) = builder.try_init() {
        log::debug!("Logger already initialised: {}", e);
    }

    Ok(target)
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}
