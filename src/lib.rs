#![warn(missing_docs)]

//! # countdown-widget
//!
//! A configurable countdown-timer widget for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The widget counts down from a configured duration, shows the remaining time
//! as `MM:SS` (or `MM:SS.CC` with hundredths), offers start/pause and reset
//! controls, and signals completion exactly once when it reaches zero. It
//! follows the Elm Architecture like every bubbletea-rs component, with
//! `init()`, `update()` and `view()` methods.
//!
//! The crate is split into layers that can be used on their own:
//!
//! - [`countdown`]: the runtime-free state machine and time formatting
//! - [`schema`]: the declarative parameter schema with visibility predicates
//! - [`params`]: the typed parameters the widget reads
//! - [`host`]: the injected host interface (parameters, state cells, events)
//! - [`tone`]: best-effort completion tone playback
//! - [`widget`]: the bubbletea-rs component tying it all together
//! - [`config`]: loading retained parameter values from TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use countdown_widget::prelude::*;
//! use std::time::Duration;
//!
//! // The bare state machine
//! let mut countdown = Countdown::new(Duration::from_secs(30), true);
//! countdown.tick(Precision::Seconds.step());
//! assert_eq!(format_time(countdown.remaining(), false), "00:29");
//!
//! // The full widget, driven by a host
//! let host = MemoryHost::new(Parameters {
//!     duration: 30.0,
//!     auto_start: true,
//!     ..Parameters::default()
//! });
//! let mut widget = CountdownWidget::new(host.clone());
//! let first_tick = widget.init();
//! assert!(first_tick.is_some());
//! assert!(widget.running());
//! ```
//!
//! ## Parameters
//!
//! | Parameter | Default | Notes |
//! |-----------|---------|-------|
//! | `mode` | `Simple` | `Advanced` unlocks the fields marked below |
//! | `title` | `Focus time!` | |
//! | `duration` | 60 | seconds, 5 to 600 in steps of 5 |
//! | `autoStart` | false | |
//! | `showMilliseconds` | false | advanced only |
//! | `appearance.*` | | colors, background image, font size, padding |
//! | `advanced.enableSound` | false | advanced only, 800Hz for 200ms |
//! | `advanced.completionMessage` | `⏰ Time's up!` | advanced only |
//!
//! ## Features
//!
//! - `sound`: synthesize the completion tone on the default audio device
//!   instead of ringing the terminal bell.

pub mod config;
pub mod countdown;
pub mod error;
pub mod host;
pub mod key;
pub mod params;
pub mod schema;
pub mod tone;
pub mod widget;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused widget reacts to its key bindings; a blurred one ignores key
/// presses but keeps counting.
///
/// ```rust
/// use countdown_widget::prelude::*;
///
/// let mut countdown = CountdownWidget::default();
/// assert!(!countdown.focused());
///
/// countdown.focus();
/// assert!(countdown.focused());
///
/// countdown.blur();
/// assert!(!countdown.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for the bubbletea runtime to execute.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use countdown::{format_time, Countdown, Precision, Status, TickOutcome};
pub use error::{ConfigError, SchemaError, ToneError};
pub use host::{Host, MemoryHost, State, WidgetEvent};
pub use params::{Mode, Parameters};
pub use schema::{widget_definition, Schema};
pub use widget::{
    CompleteMsg, Model as CountdownWidget, ParametersMsg, ResetMsg, StartStopMsg,
    TickMsg as CountdownTickMsg,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use countdown_widget::prelude::*;
///
/// let widget = CountdownWidget::new(MemoryHost::new(Parameters::default()));
/// assert_eq!(widget.status(), Status::Paused);
/// ```
pub mod prelude {
    pub use crate::countdown::{format_time, Countdown, Precision, Status, TickOutcome};
    pub use crate::host::{Host, MemoryHost, State, WidgetEvent};
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::params::{Mode, Parameters};
    pub use crate::schema::{folder, when, widget_definition, Param, Schema, Values};
    pub use crate::tone::{Silent, TerminalBell, Tone, TonePlayer};
    pub use crate::widget::{
        CompleteMsg, KeyMap as CountdownKeyMap, Model as CountdownWidget, ParametersMsg,
        ResetMsg, StartStopMsg, TickMsg as CountdownTickMsg,
    };
    pub use crate::Component;
}
