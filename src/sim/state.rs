//! Game state and core simulation types

use std::time::Duration;

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::apple::Apple;
use super::snake::SnakeBody;
use crate::settings::Settings;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashReason {
    /// Head ran into the body
    SelfCollision,
    /// Head left the playfield
    BoundaryExit,
}

/// Result of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub reason: CrashReason,
    pub final_score: u32,
    /// The run beat the previous best score
    pub new_best: bool,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, game-over screen waiting for confirm
    GameOver(GameOver),
}

/// Something that happened during a tick, for the audio/persistence layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The head reached the apple; `growth` segments were queued and scored
    AppleEaten { growth: u32 },
    /// The run ended
    GameOver(GameOver),
    /// A fresh run started from the game-over screen
    Restarted,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub snake: SnakeBody,
    pub apple: Apple,
    pub score: u32,
    /// Best score across runs, authoritative once loaded
    pub best_score: u32,
    pub phase: GamePhase,
    /// Ticks since the current run started
    pub elapsed_ticks: u64,
}

impl GameState {
    /// Create a new game state. `settings` are expected to be validated.
    pub fn new(settings: Settings, seed: u64, best_score: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let snake = fresh_snake(&settings);
        let apple = Apple::spawn(
            &mut rng,
            settings.window_width,
            settings.window_height,
            settings.move_size,
        );

        Self {
            settings,
            seed,
            rng,
            snake,
            apple,
            score: 0,
            best_score,
            phase: GamePhase::Playing,
            elapsed_ticks: 0,
        }
    }

    /// Start a new run: fresh snake and apple, score and clock zeroed.
    /// The best score and RNG stream carry over.
    pub fn restart(&mut self) {
        self.snake = fresh_snake(&self.settings);
        self.apple = Apple::spawn(
            &mut self.rng,
            self.settings.window_width,
            self.settings.window_height,
            self.settings.move_size,
        );
        self.score = 0;
        self.elapsed_ticks = 0;
        self.phase = GamePhase::Playing;
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Result of the last run, while the game-over screen is up
    pub fn game_over(&self) -> Option<GameOver> {
        match self.phase {
            GamePhase::GameOver(over) => Some(over),
            GamePhase::Playing => None,
        }
    }

    /// Play time of the current run, as ticks times the tick interval
    pub fn elapsed(&self) -> Duration {
        let ticks = u32::try_from(self.elapsed_ticks).unwrap_or(u32::MAX);
        self.settings.tick_interval() * ticks
    }
}

fn fresh_snake(settings: &Settings) -> SnakeBody {
    SnakeBody::new(
        settings.initial_length,
        IVec2::new(settings.start_x, settings.start_y),
    )
}
