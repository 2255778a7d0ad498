use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("state directory missing or not writable: {0}")]
    StateDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Writes small state files atomically: temp file in the same directory,
/// fsync, then rename over the target.
///
/// The history file goes through this writer so a crash mid-write can never
/// leave a torn file behind.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        self.ensure_dir()?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Rename-over fails on Windows when the target exists, so clear it.
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }

    fn ensure_dir(&self) -> Result<(), PersistError> {
        if self.dir.exists() {
            if !self.dir.is_dir() {
                return Err(PersistError::StateDir("path is not a directory".into()));
            }
            return Ok(());
        }
        fs::create_dir_all(&self.dir).map_err(|e| PersistError::StateDir(e.to_string()))
    }
}
