//! Event handling for the application.
//!
//! Terminal input is polled on the render thread and turned into `Event`s;
//! `keys` maps key presses to focus-aware actions.

mod handler;
pub mod keys;

use crossterm::event::KeyEvent;

pub use handler::EventHandler;
pub use keys::{Focus, KeyAction};

/// Events delivered to the application's `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),
    /// Terminal resized to (width, height).
    Resize(u16, u16),
    /// No input within the tick interval.
    Tick,
}
