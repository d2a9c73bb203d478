//! Game settings
//!
//! Loaded from an optional JSON file, then overridden from the command line.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Playfield width in pixels
    pub window_width: i32,
    /// Playfield height in pixels
    pub window_height: i32,
    /// Tile edge used for collision boxes and cell mapping
    pub tile_size: i32,
    /// Head travel per tick, always equal to `tile_size`
    pub move_size: i32,

    // === Snake ===
    pub start_x: i32,
    pub start_y: i32,
    /// Segments in a fresh snake (at least 2)
    pub initial_length: usize,

    // === Loop ===
    /// Fixed tick interval in milliseconds
    pub tick_interval_ms: u64,

    // === Persistence ===
    /// Flat text file holding the best score
    pub best_score_path: PathBuf,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            tile_size: TILE_SIZE,
            move_size: MOVE_SIZE,

            start_x: START_X,
            start_y: START_Y,
            initial_length: INITIAL_LENGTH,

            tick_interval_ms: TICK_INTERVAL_MS,

            best_score_path: PathBuf::from(BEST_SCORE_FILE),

            master_volume: 0.8,
            muted: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&json)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Reject configurations the simulation can't run with
    pub fn validate(&self) -> Result<()> {
        ensure!(self.tile_size > 0, "tile_size must be positive");
        ensure!(self.move_size > 0, "move_size must be positive");
        ensure!(
            self.tile_size == self.move_size,
            "tile_size {} and move_size {} must match: the snake moves one tile per tick",
            self.tile_size,
            self.move_size
        );
        ensure!(
            self.initial_length >= 2,
            "initial_length must be at least 2 (got {})",
            self.initial_length
        );
        ensure!(self.tick_interval_ms > 0, "tick_interval_ms must be positive");

        let Some(min_extent) = APPLE_EDGE_MARGIN.checked_mul(self.move_size) else {
            bail!("move_size {} is too large", self.move_size);
        };
        if self.window_width < min_extent || self.window_height < min_extent {
            bail!(
                "window {}x{} is smaller than the apple spawn margin ({} px)",
                self.window_width,
                self.window_height,
                min_extent
            );
        }

        ensure!(
            self.start_x % self.move_size == 0 && self.start_y % self.move_size == 0,
            "start position ({}, {}) is not aligned to move_size {}",
            self.start_x,
            self.start_y,
            self.move_size
        );
        ensure!(
            (0..=self.window_width).contains(&self.start_x)
                && (0..=self.window_height).contains(&self.start_y),
            "start position ({}, {}) is outside the window",
            self.start_x,
            self.start_y
        );
        ensure!(
            (0.0..=1.0).contains(&self.master_volume),
            "master_volume must be within 0.0 - 1.0"
        );
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Volume actually applied to sound cues (respects mute)
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }
}
