//! Grid coordinates and headings

use glam::IVec2;

/// A pixel position aligned to the move step
pub type GridPosition = IVec2;

/// Marker for a segment appended by `SnakeBody::grow` that no shift has
/// populated yet. No reachable head position can overlap it.
pub const QUEUED_SEGMENT: GridPosition = IVec2::new(i32::MIN, i32::MIN);

/// Whether a segment is still waiting to be populated
#[inline]
pub fn is_queued(pos: GridPosition) -> bool {
    pos == QUEUED_SEGMENT
}

/// Heading of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step in screen space (y grows downward)
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }
}
