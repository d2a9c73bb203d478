//! Best score persistence
//!
//! The best score lives in a flat text file holding one decimal integer.
//! A missing file reads as 0; a file that exists but can't be read or
//! parsed is an error so a corrupt record is never silently overwritten.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Storage for the all-time best score
pub trait BestScoreStore {
    fn load(&mut self) -> Result<u32>;
    fn save(&mut self, score: u32) -> Result<()>;
}

/// Best score kept in a plain text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BestScoreStore for FileStore {
    fn load(&mut self) -> Result<u32> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No best score at {}, starting from 0", self.path.display());
                return Ok(0);
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read best score from {}", self.path.display())
                });
            }
        };

        let score = text.trim().parse::<u32>().with_context(|| {
            format!(
                "Best score file {} does not hold a number: {:?}",
                self.path.display(),
                text.trim()
            )
        })?;
        log::info!("Loaded best score {} from {}", score, self.path.display());
        Ok(score)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("Failed to write best score to {}", self.path.display()))?;
        log::info!("Best score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub best: u32,
    /// Number of successful saves
    pub writes: usize,
}

impl MemoryStore {
    pub fn with_best(best: u32) -> Self {
        Self { best, writes: 0 }
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&mut self) -> Result<u32> {
        Ok(self.best)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.best = score;
        self.writes += 1;
        Ok(())
    }
}
