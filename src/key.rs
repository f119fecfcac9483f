//! Key bindings for the countdown widget.
//!
//! A [`Binding`] groups the key presses that trigger one action together with
//! the help text describing it. [`KeyMap`] exposes bindings to help views.
//!
//! ```rust
//! use countdown_widget::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let reset = Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset");
//! let msg = KeyMsg {
//!     key: KeyCode::Char('r'),
//!     modifiers: KeyModifiers::NONE,
//! };
//! assert!(reset.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// How the key is shown, e.g. `space`.
    pub key: String,
    /// What it does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Binds the given key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding responds to key presses.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// The bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled()
            && self
                .keys
                .iter()
                .any(|k| k.code == msg.key && msg.modifiers.contains(k.modifiers))
    }
}

/// Exposes a component's bindings to help views.
pub trait KeyMap {
    /// Bindings for the one-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings for the expanded help, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_matches_any_bound_key() {
        let toggle = Binding::new(vec![KeyCode::Char(' '), KeyCode::Enter]);
        assert!(toggle.matches(&press(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(toggle.matches(&press(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!toggle.matches(&press(KeyCode::Char('x'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_modifiers_required() {
        let quit = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
        assert!(quit.matches(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!quit.matches(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut reset = Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset");
        reset.set_enabled(false);
        assert!(!reset.enabled());
        assert!(!reset.matches(&press(KeyCode::Char('r'), KeyModifiers::NONE)));
        assert_eq!(reset.help().desc, "reset");
    }
}
