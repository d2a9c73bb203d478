//! Rendering
//!
//! `frame` turns a `GameState` into text lines; `terminal` puts them on screen.

pub mod frame;
pub mod terminal;

pub use frame::{Frame, compose};
pub use terminal::TerminalRenderer;
