//! Best-score storage.
//!
//! The only value that outlives a session is the best score: one
//! non-negative integer. `FileBestScore` keeps it as decimal text.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors from a best-score store.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed best score {content:?} in {path}")]
    Malformed { path: String, content: String },
}

/// Somewhere to keep the best score between sessions.
pub trait BestScoreStore {
    /// Read the stored value. A store that was never written yields 0.
    fn load(&self) -> Result<u64, StoreError>;

    /// Overwrite the stored value.
    fn save(&mut self, best: u64) -> Result<(), StoreError>;
}

/// Best score kept in a text file.
#[derive(Clone, Debug)]
pub struct FileBestScore {
    path: PathBuf,
}

impl FileBestScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for FileBestScore {
    fn load(&self) -> Result<u64, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        trimmed.parse().map_err(|_| StoreError::Malformed {
            path: self.path.display().to_string(),
            content: trimmed.to_string(),
        })
    }

    fn save(&mut self, best: u64) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        // Replace atomically: write a sibling file, then rename over the target.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, format!("{best}\n"))?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("saved best score {best} to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store, for tests and for running without a file.
#[derive(Clone, Debug, Default)]
pub struct MemoryBestScore {
    value: u64,
}

impl MemoryBestScore {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self { value }
    }
}

impl BestScoreStore for MemoryBestScore {
    fn load(&self) -> Result<u64, StoreError> {
        Ok(self.value)
    }

    fn save(&mut self, best: u64) -> Result<(), StoreError> {
        self.value = best;
        Ok(())
    }
}
