//! The countdown widget component.
//!
//! [`Model`] presents a [`Countdown`] inside a bubbletea-rs application. It
//! reads its parameters from a [`Host`], keeps the remaining time and running
//! flag in host-provided state cells, drives the countdown with a single tick
//! command, and reports completion both to the host (as an `onComplete`
//! event) and to the parent model (as a [`CompleteMsg`]).
//!
//! # Basic Usage
//!
//! ```rust
//! use countdown_widget::host::MemoryHost;
//! use countdown_widget::params::Parameters;
//! use countdown_widget::widget::Model;
//!
//! let host = MemoryHost::new(Parameters {
//!     duration: 90.0,
//!     ..Parameters::default()
//! });
//! let widget = Model::new(host);
//!
//! assert_eq!(widget.remaining().as_secs(), 90);
//! assert!(!widget.running());
//! assert_eq!(widget.formatted_time(), "01:30");
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use countdown_widget::host::MemoryHost;
//! use countdown_widget::widget::{CompleteMsg, Model};
//! use countdown_widget::Component;
//!
//! struct App {
//!     countdown: Model,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut countdown = Model::new(MemoryHost::default());
//!         countdown.focus();
//!         let cmd = countdown.init();
//!         (Self { countdown }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(done) = msg.downcast_ref::<CompleteMsg>() {
//!             if done.id == self.countdown.id() {
//!                 // Countdown finished
//!             }
//!         }
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.countdown.view()
//!     }
//! }
//! ```
//!
//! # Timer lifetime
//!
//! Every stretch of running time has a tag. Entering the running state bumps
//! the tag and arms one [`TickMsg`] carrying it; each accepted tick arms the
//! next. Pausing, resetting, finishing and changing parameters bump the tag
//! again, so any tick still in flight is dropped on arrival. At most one tick
//! chain is ever live.

mod digits;
mod keymap;
mod view;

pub use keymap::KeyMap;

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

use crate::countdown::{Countdown, Status, TickOutcome};
use crate::host::{Host, MemoryHost, State, WidgetEvent};
use crate::params::Parameters;
use crate::tone::{self, Tone, TonePlayer};
use crate::Component;

// Internal ID management for widget instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Starts or pauses a widget. Sent by [`Model::start`], [`Model::stop`] and
/// [`Model::toggle`].
#[derive(Debug, Clone)]
pub struct StartStopMsg {
    /// Target widget; 0 addresses every widget.
    pub id: i64,
    running: bool,
}

/// Restores a widget to its full duration. Sent by [`Model::reset`].
#[derive(Debug, Clone)]
pub struct ResetMsg {
    /// Target widget; 0 addresses every widget.
    pub id: i64,
}

/// One tick of a running widget.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Widget that armed the tick.
    pub id: i64,
    tag: i64,
}

/// Replaces a widget's parameters and reinitializes its countdown.
#[derive(Debug, Clone)]
pub struct ParametersMsg {
    /// Target widget; 0 addresses every widget.
    pub id: i64,
    /// The new parameters.
    pub params: Parameters,
}

/// Sent to the parent model once when a countdown reaches zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteMsg {
    /// Widget that finished.
    pub id: i64,
    /// The configured duration in seconds.
    pub duration: f64,
}

/// The countdown widget.
#[derive(Debug)]
pub struct Model<H: Host = MemoryHost> {
    /// Key bindings, active while focused.
    pub keymap: KeyMap,

    host: H,
    params: Parameters,
    time: State<Duration>,
    running: State<bool>,
    tone: Box<dyn TonePlayer>,
    id: i64,
    tag: i64,
    focus: bool,
    width: usize,
}

impl<H: Host> Model<H> {
    /// Creates a widget reading parameters and state cells from `host`.
    ///
    /// The countdown starts at the configured duration and is running if
    /// `autoStart` is set; call [`Model::init`] to arm the first tick.
    pub fn new(host: H) -> Self {
        let params = host.parameters();
        let initial = Countdown::new(params.duration(), params.auto_start);
        let time = host.create_state(initial.remaining());
        let running = host.create_state(initial.running());

        Self {
            keymap: KeyMap::default(),
            host,
            params,
            time,
            running,
            tone: tone::default_player(),
            id: next_id(),
            tag: 0,
            focus: false,
            width: 0,
        }
    }

    /// Replaces the player used for the completion tone.
    pub fn with_tone_player(mut self, player: Box<dyn TonePlayer>) -> Self {
        self.tone = player;
        self
    }

    /// Unique ID of this widget.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The host this widget runs against.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The parameters currently in effect.
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    /// Time left on the clock.
    pub fn remaining(&self) -> Duration {
        self.time.get()
    }

    /// Whether the countdown is counting.
    pub fn running(&self) -> bool {
        self.running.get()
    }

    /// Whether the countdown has reached zero.
    pub fn finished(&self) -> bool {
        self.remaining().is_zero()
    }

    /// The current state.
    pub fn status(&self) -> Status {
        self.countdown().status()
    }

    /// The clock text, e.g. `01:05` or `01:05.00`.
    pub fn formatted_time(&self) -> String {
        crate::countdown::format_time(self.remaining(), self.params.show_milliseconds())
    }

    /// Arms the first tick if the countdown auto-started.
    pub fn init(&mut self) -> Option<Cmd> {
        if self.running() {
            return Some(self.arm());
        }
        None
    }

    /// A command that starts the countdown.
    pub fn start(&self) -> Cmd {
        self.start_stop(true)
    }

    /// A command that pauses the countdown.
    pub fn stop(&self) -> Cmd {
        self.start_stop(false)
    }

    /// A command that starts a paused countdown or pauses a running one.
    pub fn toggle(&self) -> Cmd {
        self.start_stop(!self.running())
    }

    /// A command that restores the full duration and pauses.
    pub fn reset(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(ResetMsg { id }) as Msg
        })
    }

    /// Applies new parameters.
    ///
    /// The countdown is reinitialized to the new duration and `autoStart`,
    /// any outstanding tick is cancelled, and a fresh tick is returned if the
    /// countdown auto-starts.
    pub fn set_parameters(&mut self, params: Parameters) -> Option<Cmd> {
        let countdown = Countdown::new(params.duration(), params.auto_start);
        self.params = params;
        self.store(&countdown);
        self.cancel();
        tracing::debug!(
            id = self.id,
            duration = self.params.duration,
            auto_start = self.params.auto_start,
            "countdown parameters applied"
        );
        if countdown.running() {
            return Some(self.arm());
        }
        None
    }

    /// Re-reads parameters from the host and applies them.
    pub fn reload_parameters(&mut self) -> Option<Cmd> {
        let params = self.host.parameters();
        self.set_parameters(params)
    }

    /// Processes a message.
    ///
    /// Handles [`StartStopMsg`], [`ResetMsg`], [`TickMsg`], [`ParametersMsg`],
    /// window resizes, and key presses while focused. Messages addressed to
    /// another widget are ignored.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(start_stop) = msg.downcast_ref::<StartStopMsg>() {
            if !self.addressed(start_stop.id) {
                return None;
            }
            return if start_stop.running {
                self.begin()
            } else {
                self.pause();
                None
            };
        }

        if let Some(reset) = msg.downcast_ref::<ResetMsg>() {
            if self.addressed(reset.id) {
                self.restore();
            }
            return None;
        }

        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            // Ticks from a cancelled run carry a stale tag
            if tick.id != self.id || tick.tag != self.tag {
                return None;
            }
            return self.advance();
        }

        if let Some(params) = msg.downcast_ref::<ParametersMsg>() {
            if !self.addressed(params.id) {
                return None;
            }
            return self.set_parameters(params.params.clone());
        }

        if let Some(size) = msg.downcast_ref::<bubbletea_rs::WindowSizeMsg>() {
            self.width = size.width as usize;
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if !self.focus {
                return None;
            }
            if self.keymap.toggle.matches(key_msg) {
                return if self.running() {
                    self.pause();
                    None
                } else {
                    self.begin()
                };
            }
            if self.keymap.reset.matches(key_msg) {
                self.restore();
            }
        }

        None
    }

    /// Renders the widget.
    pub fn view(&self) -> String {
        view::render(self)
    }

    fn addressed(&self, id: i64) -> bool {
        id == 0 || id == self.id
    }

    fn countdown(&self) -> Countdown {
        Countdown::from_parts(self.params.duration(), self.remaining(), self.running())
    }

    fn store(&self, countdown: &Countdown) {
        self.time.set(countdown.remaining());
        self.running.set(countdown.running());
    }

    fn transition<R>(&self, f: impl FnOnce(&mut Countdown) -> R) -> R {
        let mut countdown = self.countdown();
        let out = f(&mut countdown);
        self.store(&countdown);
        out
    }

    /// Invalidates any tick in flight.
    fn cancel(&mut self) {
        self.tag += 1;
    }

    /// Starts a new run and returns its first tick.
    fn arm(&mut self) -> Cmd {
        self.cancel();
        self.tick()
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.params.precision().interval(), move |_| {
            Box::new(TickMsg { id, tag }) as Msg
        })
    }

    fn start_stop(&self, running: bool) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(StartStopMsg { id, running }) as Msg
        })
    }

    fn begin(&mut self) -> Option<Cmd> {
        if self.running() {
            return None;
        }
        if !self.transition(Countdown::start) {
            tracing::debug!(id = self.id, "start refused, countdown finished");
            return None;
        }
        tracing::debug!(id = self.id, remaining = ?self.remaining(), "countdown started");
        Some(self.arm())
    }

    fn pause(&mut self) {
        if !self.running() {
            return;
        }
        self.transition(Countdown::pause);
        self.cancel();
        tracing::debug!(id = self.id, remaining = ?self.remaining(), "countdown paused");
    }

    fn restore(&mut self) {
        self.transition(Countdown::reset);
        self.cancel();
        tracing::debug!(id = self.id, "countdown reset");
    }

    fn advance(&mut self) -> Option<Cmd> {
        let step = self.params.precision().step();
        match self.transition(|c| c.tick(step)) {
            TickOutcome::Ignored => None,
            TickOutcome::Ticked => Some(self.tick()),
            TickOutcome::Finished => {
                self.cancel();
                Some(self.complete())
            }
        }
    }

    fn complete(&mut self) -> Cmd {
        let id = self.id;
        let duration = self.params.duration;

        tracing::info!(id, duration, "countdown complete");
        self.host.emit(&WidgetEvent::Complete { duration });
        if self.params.sound_enabled() {
            tone::play_best_effort(self.tone.as_ref(), Tone::COMPLETION);
        }

        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(CompleteMsg { id, duration }) as Msg
        })
    }
}

impl<H: Host> Component for Model<H> {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl<H: Host + Default> BubbleTeaModel for Model<H> {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Model::new(H::default());
        model.focus = true;
        let cmd = Model::init(&mut model);
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}

impl Default for Model<MemoryHost> {
    fn default() -> Self {
        Model::new(MemoryHost::default())
    }
}
