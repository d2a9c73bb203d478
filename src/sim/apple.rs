//! The apple

use glam::IVec2;
use rand::Rng;

use super::grid::GridPosition;
use crate::consts::APPLE_EDGE_MARGIN;

/// The single apple on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub pos: GridPosition,
}

impl Apple {
    /// Place an apple at a random grid-aligned spot, keeping clear of the
    /// far edges by `APPLE_EDGE_MARGIN` steps.
    pub fn spawn<R: Rng>(rng: &mut R, width: i32, height: i32, move_size: i32) -> Self {
        Self {
            pos: random_position(rng, width, height, move_size),
        }
    }

    /// Move to a fresh position. The snake body is not avoided, so an apple
    /// can land underneath it.
    pub fn relocate<R: Rng>(&mut self, rng: &mut R, width: i32, height: i32, move_size: i32) {
        self.pos = random_position(rng, width, height, move_size);
    }
}

fn random_position<R: Rng>(
    rng: &mut R,
    width: i32,
    height: i32,
    move_size: i32,
) -> GridPosition {
    IVec2::new(
        random_axis(rng, width, move_size),
        random_axis(rng, height, move_size),
    )
}

fn random_axis<R: Rng>(rng: &mut R, extent: i32, move_size: i32) -> i32 {
    let max_step = (extent / move_size - APPLE_EDGE_MARGIN).max(0);
    rng.random_range(0..=max_step) * move_size
}
