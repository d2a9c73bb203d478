//! Fixed timestep simulation tick
//!
//! Core game loop step that advances the simulation deterministically.

use super::collision::{near_edge, out_of_bounds, overlaps};
use super::grid::Direction;
use super::state::{CrashReason, GameEvent, GameOver, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Requested heading (arrow keys / WASD)
    pub direction: Option<Direction>,
    /// Start a new run from the game-over screen (Enter)
    pub confirm: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let GamePhase::GameOver(_) = state.phase {
        if input.confirm {
            state.restart();
            log::info!("New run started (best score {})", state.best_score);
            events.push(GameEvent::Restarted);
        }
        return events;
    }

    if let Some(direction) = input.direction {
        state.snake.set_direction(direction);
    }

    let settings = &state.settings;
    let tile = settings.tile_size;
    let (width, height) = (settings.window_width, settings.window_height);

    state.snake.step(settings.move_size);
    state.elapsed_ticks += 1;
    let head = state.snake.head();

    // Apple
    if overlaps(state.apple.pos, head, tile) {
        // Apples hugging a wall are worth double
        let growth = if near_edge(state.apple.pos, width, height, tile) {
            2
        } else {
            1
        };
        state.snake.grow(growth as usize);
        state.score += growth;
        state
            .apple
            .relocate(&mut state.rng, width, height, settings.move_size);
        log::debug!("Apple eaten: +{} (score {})", growth, state.score);
        events.push(GameEvent::AppleEaten { growth });
    }

    // Self collision, then walls
    let crash = if state
        .snake
        .collidable_segments()
        .any(|segment| overlaps(*segment, head, tile))
    {
        Some(CrashReason::SelfCollision)
    } else if out_of_bounds(head, width, height) {
        Some(CrashReason::BoundaryExit)
    } else {
        None
    };

    if let Some(reason) = crash {
        let new_best = state.score > state.best_score;
        if new_best {
            state.best_score = state.score;
        }
        let over = GameOver {
            reason,
            final_score: state.score,
            new_best,
        };
        log::info!(
            "Game over ({:?}) at ({}, {}): score {}, best {}",
            reason,
            head.x,
            head.y,
            state.score,
            state.best_score
        );
        state.phase = GamePhase::GameOver(over);
        events.push(GameEvent::GameOver(over));
    }

    events
}
