//! Key bindings for the countdown widget.

use crossterm::event::KeyCode;

use crate::key::{self, Binding};

/// Bindings for the widget's two buttons.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Start or pause the countdown.
    pub toggle: Binding,
    /// Restore the full duration.
    pub reset: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            toggle: Binding::new(vec![KeyCode::Char(' '), KeyCode::Enter])
                .with_help("space", "start/pause"),
            reset: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
        }
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.toggle, &self.reset]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.toggle, &self.reset]]
    }
}
