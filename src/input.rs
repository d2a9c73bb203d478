//! Keyboard mapping

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::{Direction, TickInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    /// Enter - restart from the game-over screen
    Confirm,
    Quit,
    None,
}

pub fn map_key(key: KeyEvent) -> KeyAction {
    // Only presses; repeats and releases would double-turn
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Turn(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            KeyAction::Turn(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            KeyAction::Turn(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            KeyAction::Turn(Direction::Right)
        }
        KeyCode::Enter => KeyAction::Confirm,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

/// Folds the key actions polled between two ticks into one `TickInput`.
/// The last turn wins.
#[derive(Debug, Default)]
pub struct InputState {
    pending: TickInput,
    quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Turn(dir) => self.pending.direction = Some(dir),
            KeyAction::Confirm => self.pending.confirm = true,
            KeyAction::Quit => self.quit = true,
            KeyAction::None => {}
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Hand over the input for this tick and clear one-shot state
    pub fn take_tick_input(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(press(KeyCode::Up)), KeyAction::Turn(Direction::Up));
        assert_eq!(map_key(press(KeyCode::Down)), KeyAction::Turn(Direction::Down));
        assert_eq!(map_key(press(KeyCode::Left)), KeyAction::Turn(Direction::Left));
        assert_eq!(map_key(press(KeyCode::Right)), KeyAction::Turn(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(map_key(press(KeyCode::Char('w'))), KeyAction::Turn(Direction::Up));
        assert_eq!(map_key(press(KeyCode::Char('A'))), KeyAction::Turn(Direction::Left));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(press(KeyCode::Enter)), KeyAction::Confirm);
        assert_eq!(map_key(press(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(map_key(press(KeyCode::Char('q'))), KeyAction::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), KeyAction::Quit);
        assert_eq!(map_key(press(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_key(release), KeyAction::None);
    }

    #[test]
    fn test_input_state_last_turn_wins() {
        let mut input = InputState::new();
        input.apply(KeyAction::Turn(Direction::Up));
        input.apply(KeyAction::Turn(Direction::Left));
        input.apply(KeyAction::Confirm);

        let tick = input.take_tick_input();
        assert_eq!(tick.direction, Some(Direction::Left));
        assert!(tick.confirm);

        // One-shot: cleared after being taken
        let next = input.take_tick_input();
        assert_eq!(next.direction, None);
        assert!(!next.confirm);
        assert!(!input.quit_requested());

        input.apply(KeyAction::Quit);
        assert!(input.quit_requested());
    }
}
