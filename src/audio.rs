//! Sound cues
//!
//! The terminal frontend has no mixer, so cues are rung on the terminal bell.

use std::io::{self, Stdout, Write};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Snake ate an apple
    Eat,
    /// Run ended on a wall or the snake's own body
    Crash,
}

impl SoundEffect {
    /// Bell pattern for the cue
    fn bell_count(self) -> usize {
        match self {
            SoundEffect::Eat => 1,
            SoundEffect::Crash => 2,
        }
    }
}

/// Anything that can play the game's sound cues
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio manager for the game. Mute is folded into the volume by
/// `Settings::effective_volume`.
pub struct AudioManager<W: Write = Stdout> {
    out: W,
    master_volume: f32,
}

impl AudioManager<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for AudioManager<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> AudioManager<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            master_volume: 0.8,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for AudioManager<W> {
    fn play(&mut self, effect: SoundEffect) {
        if self.master_volume <= 0.0 {
            return;
        }

        log::debug!("Sound: {:?}", effect);
        let bells = "\x07".repeat(effect.bell_count());
        if let Err(e) = self.out.write_all(bells.as_bytes()).and_then(|_| self.out.flush()) {
            log::warn!("Failed to ring terminal bell: {}", e);
        }
    }
}

/// Records cues in order, for tests
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub played: Vec<SoundEffect>,
}

impl AudioSink for Recorder {
    fn play(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }
}
