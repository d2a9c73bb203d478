//! Frame composition
//!
//! Pixel positions map to cells by dividing by the tile size. Each cell is two
//! characters wide so tiles look roughly square in a terminal.

use crate::sim::grid::is_queued;
use crate::sim::{Direction, GameOver, GameState, GridPosition};

const EMPTY: &str = "  ";
const BODY: &str = "██";
const TAIL: &str = "▒▒";
const APPLE: &str = "()";
const CELL_WIDTH: usize = 2;

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "^^",
        Direction::Down => "vv",
        Direction::Left => "<<",
        Direction::Right => ">>",
    }
}

/// A composed screen, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
}

/// Cell canvas for the playfield
struct Canvas {
    cols: usize,
    rows: usize,
    tile: i32,
    cells: Vec<&'static str>,
}

impl Canvas {
    fn new(state: &GameState) -> Self {
        let s = &state.settings;
        let cols = (s.window_width / s.tile_size).max(1) as usize;
        let rows = (s.window_height / s.tile_size).max(1) as usize;
        Self {
            cols,
            rows,
            tile: s.tile_size,
            cells: vec![EMPTY; cols * rows],
        }
    }

    /// Paint a glyph, clipping queued and off-screen positions
    fn put(&mut self, pos: GridPosition, glyph: &'static str) {
        if is_queued(pos) || pos.x < 0 || pos.y < 0 {
            return;
        }
        let (col, row) = ((pos.x / self.tile) as usize, (pos.y / self.tile) as usize);
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = glyph;
        }
    }

    fn inner_width(&self) -> usize {
        self.cols * CELL_WIDTH
    }

    fn into_rows(self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| format!("|{}|", row.concat()))
            .collect()
    }
}

/// Compose the screen for the current state
pub fn compose(state: &GameState) -> Frame {
    let canvas = Canvas::new(state);
    let width = canvas.inner_width();
    let border = format!("+{}+", "-".repeat(width));

    let mut lines = Vec::with_capacity(canvas.rows + 3);
    match state.game_over() {
        Some(over) => {
            lines.push(String::new());
            lines.push(border.clone());
            lines.extend(game_over_rows(&over, state.best_score, width, canvas.rows));
        }
        None => {
            lines.push(hud_line(state));
            lines.push(border.clone());
            lines.extend(playfield_rows(state, canvas));
        }
    }
    lines.push(border);

    Frame { lines }
}

/// Head position, elapsed time and scores. The time is counted in ticks, so
/// it follows the wall clock only while the loop keeps up with the tick rate.
pub fn hud_line(state: &GameState) -> String {
    let head = state.snake.head();
    format!(
        "x: {}, y: {}   Time: {:.1}s   Best score: {}  Score: {}",
        head.x,
        head.y,
        state.elapsed().as_secs_f32(),
        state.best_score,
        state.score
    )
}

fn playfield_rows(state: &GameState, mut canvas: Canvas) -> Vec<String> {
    let segments = state.snake.segments();

    canvas.put(state.snake.head(), head_glyph(state.snake.direction()));
    if segments.len() > 2 {
        for segment in &segments[1..segments.len() - 1] {
            canvas.put(*segment, BODY);
        }
    }
    canvas.put(state.snake.tail(), TAIL);
    canvas.put(state.apple.pos, APPLE);

    canvas.into_rows()
}

fn game_over_rows(over: &GameOver, best_score: u32, width: usize, rows: usize) -> Vec<String> {
    let messages = [
        format!(
            "Game Over !!! Your Score: {}  Best score: {}",
            over.final_score, best_score
        ),
        "To play again press <Enter>  Or <Escape> to exit".to_string(),
    ];

    let first = rows.saturating_sub(messages.len()) / 2;
    (0..rows)
        .map(|row| {
            let text = row
                .checked_sub(first)
                .and_then(|i| messages.get(i))
                .map(String::as_str)
                .unwrap_or("");
            format!("|{}|", center(text, width))
        })
        .collect()
}

fn center(text: &str, width: usize) -> String {
    let text: String = text.chars().take(width).collect();
    let pad = width - text.chars().count();
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}
