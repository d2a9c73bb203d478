//! Snake Arcade - the classic grid snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (snake, apple, collisions, game state)
//! - `session`: Composition root wiring the simulation to persistence and audio
//! - `persistence`: Best score storage (flat text file)
//! - `audio`: Sound cues
//! - `input`: Keyboard mapping
//! - `renderer`: Frame composition and terminal output
//! - `settings`: Game configuration

pub mod audio;
pub mod input;
pub mod persistence;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::GameSession;
pub use settings::Settings;

/// Default configuration values
pub mod consts {
    /// Playfield dimensions in pixels
    pub const WINDOW_WIDTH: i32 = 1000;
    pub const WINDOW_HEIGHT: i32 = 800;

    /// Sprite/tile edge, used for collision boxes
    pub const TILE_SIZE: i32 = 40;
    /// Distance the head travels per tick
    pub const MOVE_SIZE: i32 = 40;

    /// Snake spawn point
    pub const START_X: i32 = 120;
    pub const START_Y: i32 = 120;
    pub const INITIAL_LENGTH: usize = 2;

    /// Fixed tick interval (~20 Hz)
    pub const TICK_INTERVAL_MS: u64 = 50;

    /// Apples never spawn within this many steps of the far edges
    pub const APPLE_EDGE_MARGIN: i32 = 5;
    /// Body segments nearest the head that never count as a self-collision
    pub const HEAD_GRACE_SEGMENTS: usize = 3;

    pub const BEST_SCORE_FILE: &str = "best_score.txt";
}
