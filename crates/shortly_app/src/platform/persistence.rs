use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shortly_client::AtomicFileWriter;
use shortly_core::CompletedShortening;
use shortly_logging::{client_error, client_info, client_warn};

const HISTORY_FILENAME: &str = ".shortly_history.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedShortening {
    long_url: String,
    short_url: String,
    shortened_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedHistory {
    completed: Vec<PersistedShortening>,
}

pub(crate) fn state_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub(crate) fn load_history(state_dir: &Path) -> Vec<CompletedShortening> {
    let path = state_dir.join(HISTORY_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Vec::new();
        }
        Err(err) => {
            client_warn!("Failed to read history from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    let history: PersistedHistory = match ron::from_str(&content) {
        Ok(history) => history,
        Err(err) => {
            client_warn!("Failed to parse history from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    let completed = history
        .completed
        .into_iter()
        .map(|entry| CompletedShortening {
            long_url: entry.long_url,
            short_url: entry.short_url,
            shortened_at: entry.shortened_at,
        })
        .collect();

    client_info!("Loaded shortening history from {:?}", path);
    completed
}

pub(crate) fn save_history(state_dir: &Path, completed: &[CompletedShortening]) {
    let history = PersistedHistory {
        completed: completed
            .iter()
            .map(|entry| PersistedShortening {
                long_url: entry.long_url.clone(),
                short_url: entry.short_url.clone(),
                shortened_at: entry.shortened_at.clone(),
            })
            .collect(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&history, pretty) {
        Ok(text) => text,
        Err(err) => {
            client_error!("Failed to serialize history: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(PathBuf::from(state_dir));
    if let Err(err) = writer.write(HISTORY_FILENAME, &content) {
        client_error!("Failed to write history to {:?}: {}", state_dir, err);
    }
}
