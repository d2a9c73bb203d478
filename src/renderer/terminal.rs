//! Terminal output via crossterm

use std::io::{Stdout, Write, stdout};

use anyhow::{Context, Result};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style};

use super::frame::Frame;

/// Owns the terminal for the lifetime of the game. Raw mode and the
/// alternate screen are undone on drop, so error paths restore it too.
pub struct TerminalRenderer {
    stdout: Stdout,
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: stdout(),
            active: false,
        }
    }

    pub fn setup(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        self.active = true;
        execute!(
            self.stdout,
            EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )
        .context("Failed to enter alternate screen")?;
        Ok(())
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        for (row, line) in frame.lines.iter().enumerate() {
            queue!(
                self.stdout,
                cursor::MoveTo(0, row as u16),
                style::Print(line),
                terminal::Clear(ClearType::UntilNewLine)
            )
            .context("Failed to queue frame")?;
        }
        queue!(self.stdout, terminal::Clear(ClearType::FromCursorDown))
            .context("Failed to queue frame")?;
        self.stdout.flush().context("Failed to flush frame")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal::disable_raw_mode().context("Failed to disable raw mode")?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::error!("Failed to restore terminal: {:#}", e);
        }
    }
}
