//! Platform logging initialization for shortly_app.
//!
//! Writes logs to `./shortly.log` in the current working directory.

use std::fs::File;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "./shortly.log";

/// Destination for log output.
#[derive(Debug, PartialEq)]
pub enum LogDestination {
    /// Write to ./shortly.log in current directory.
    File,
    /// Write to terminal (stdout).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

impl LogDestination {
    /// Reads `SHORTLY_LOG` (`file`, `term`, `both`). File is the default
    /// because the TUI owns the terminal; unknown values warn and fall back
    /// to it.
    pub fn from_env() -> Self {
        match std::env::var("SHORTLY_LOG") {
            Ok(value) => Self::from_name(&value).unwrap_or_else(|| {
                eprintln!("Warning: Unknown SHORTLY_LOG value {:?}, logging to file", value);
                LogDestination::File
            }),
            Err(_) => LogDestination::File,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "file" => Some(LogDestination::File),
            "term" => Some(LogDestination::Terminal),
            "both" => Some(LogDestination::Both),
            _ => None,
        }
    }
}

/// Initialize the logger for the chosen destination.
pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        match File::create(LOG_FILENAME) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(err) => eprintln!("Warning: Could not create {}: {}", LOG_FILENAME, err),
        }
    }

    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}
