//! Game session - the composition root
//!
//! Owns the simulation state and reacts to its events: sound cues for the
//! audio sink, best score write-through for the store.

use anyhow::{Context, Result};

use crate::audio::{AudioSink, SoundEffect};
use crate::persistence::BestScoreStore;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

pub struct GameSession<S: BestScoreStore, A: AudioSink> {
    state: GameState,
    store: S,
    audio: A,
}

impl<S: BestScoreStore, A: AudioSink> GameSession<S, A> {
    /// Validate settings, read the best score once, and set up the first run.
    /// From here on the in-memory best score is authoritative.
    pub fn new(settings: Settings, mut store: S, audio: A, seed: u64) -> Result<Self> {
        settings.validate().context("Invalid settings")?;
        let best_score = store.load().context("Failed to load best score")?;
        log::info!("Session starting with seed {} (best score {})", seed, best_score);

        Ok(Self {
            state: GameState::new(settings, seed, best_score),
            store,
            audio,
        })
    }

    /// Run one tick and dispatch its side effects
    pub fn update(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let events = tick(&mut self.state, input);

        for event in &events {
            match event {
                GameEvent::AppleEaten { .. } => self.audio.play(SoundEffect::Eat),
                GameEvent::GameOver(over) => {
                    self.audio.play(SoundEffect::Crash);
                    if over.new_best {
                        if let Err(e) = self.store.save(self.state.best_score) {
                            log::error!("Could not persist best score: {:#}", e);
                        }
                    }
                }
                GameEvent::Restarted => {}
            }
        }

        events
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}
