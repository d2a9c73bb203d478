//! The snake body

use super::grid::{Direction, GridPosition, QUEUED_SEGMENT};
use crate::consts::HEAD_GRACE_SEGMENTS;

/// Ordered body segments, head first, plus the current heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeBody {
    segments: Vec<GridPosition>,
    direction: Direction,
}

impl SnakeBody {
    /// Create a body of `length` segments stacked on `start`, heading right.
    /// The stack unfolds over the first few steps.
    pub fn new(length: usize, start: GridPosition) -> Self {
        Self {
            segments: vec![start; length],
            direction: Direction::Right,
        }
    }

    pub fn head(&self) -> GridPosition {
        self.segments[0]
    }

    pub fn tail(&self) -> GridPosition {
        self.segments[self.segments.len() - 1]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[GridPosition] {
        &self.segments
    }

    /// Segments that can collide with the head. The three nearest the head
    /// always touch it at grid resolution.
    pub fn collidable_segments(&self) -> impl Iterator<Item = &GridPosition> {
        self.segments.iter().skip(HEAD_GRACE_SEGMENTS)
    }

    /// Turn, unless asked to reverse onto ourselves
    pub fn set_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.direction = direction;
        }
    }

    /// Shift every segment onto its predecessor, then advance the head
    pub fn step(&mut self, move_size: i32) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0] += self.direction.delta() * move_size;
    }

    /// Queue `n` new tail segments. They take real positions as later steps
    /// shift the body into them, one per tick.
    pub fn grow(&mut self, n: usize) {
        self.segments.extend(std::iter::repeat_n(QUEUED_SEGMENT, n));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::is_queued;
    use glam::IVec2;
    use proptest::prelude::*;

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop::sample::select(vec![
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ])
    }

    /// A body that has unfolded a bit so segments are distinct
    fn walked_snake(length: usize, turns: &[Direction]) -> SnakeBody {
        let mut snake = SnakeBody::new(length, IVec2::new(400, 400));
        for dir in turns {
            snake.set_direction(*dir);
            snake.step(20);
        }
        snake
    }

    #[test]
    fn test_new_stacks_segments_on_start() {
        let snake = SnakeBody::new(3, IVec2::new(100, 100));
        assert_eq!(snake.len(), 3);
        assert!(snake.segments().iter().all(|s| *s == IVec2::new(100, 100)));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_first_step_from_start() {
        let mut snake = SnakeBody::new(2, IVec2::new(100, 100));
        let old_head = snake.head();
        snake.step(20);
        assert_eq!(snake.head(), IVec2::new(120, 100));
        assert_eq!(snake.tail(), old_head);
    }

    #[test]
    fn test_reverse_is_ignored() {
        let mut snake = SnakeBody::new(2, IVec2::ZERO);
        snake.set_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Right);
        snake.set_direction(Direction::Up);
        assert_eq!(snake.direction(), Direction::Up);
        snake.set_direction(Direction::Down);
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_queued_segments_fill_in_over_n_steps() {
        let mut snake = walked_snake(2, &[Direction::Right; 3]);
        snake.grow(2);
        assert_eq!(snake.len(), 4);
        assert!(is_queued(snake.tail()));

        snake.step(20);
        assert!(is_queued(snake.tail()));
        snake.step(20);
        assert!(snake.segments().iter().all(|s| !is_queued(*s)));
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_collidable_segments_skip_neck() {
        let snake = walked_snake(6, &[Direction::Down; 6]);
        let collidable: Vec<_> = snake.collidable_segments().copied().collect();
        assert_eq!(collidable, snake.segments()[3..].to_vec());

        let short = SnakeBody::new(2, IVec2::ZERO);
        assert_eq!(short.collidable_segments().count(), 0);
    }

    proptest! {
        #[test]
        fn prop_grow_adds_exactly_n(
            turns in prop::collection::vec(direction_strategy(), 0..10),
            n in 0usize..8,
        ) {
            let mut snake = walked_snake(2, &turns);
            let (len, head, dir) = (snake.len(), snake.head(), snake.direction());
            snake.grow(n);
            prop_assert_eq!(snake.len(), len + n);
            prop_assert_eq!(snake.head(), head);
            prop_assert_eq!(snake.direction(), dir);
        }

        #[test]
        fn prop_step_shifts_body(
            turns in prop::collection::vec(direction_strategy(), 0..10),
            length in 2usize..8,
            move_size in 1i32..50,
        ) {
            let mut snake = walked_snake(length, &turns);
            let before = snake.segments().to_vec();
            snake.step(move_size);
            let after = snake.segments();

            prop_assert_eq!(after.len(), before.len());
            for i in 1..after.len() {
                prop_assert_eq!(after[i], before[i - 1]);
            }
            prop_assert_eq!(after[0], before[0] + snake.direction().delta() * move_size);
        }

        #[test]
        fn prop_set_direction(start in direction_strategy(), next in direction_strategy()) {
            let mut snake = SnakeBody::new(2, IVec2::ZERO);
            snake.set_direction(start);
            let current = snake.direction();
            snake.set_direction(next);
            if next == current.opposite() {
                prop_assert_eq!(snake.direction(), current);
            } else {
                prop_assert_eq!(snake.direction(), next);
            }
        }
    }
}
