//! Countdown state machine and time formatting.
//!
//! This module holds the runtime-independent heart of the widget: a remaining
//! duration, a running flag, and the transitions between them. It knows nothing
//! about terminals, commands or hosts, so it can be driven directly in tests.
//!
//! # States
//!
//! | state      | running | remaining |
//! |------------|---------|-----------|
//! | `Paused`   | false   | > 0       |
//! | `Running`  | true    | > 0       |
//! | `Finished` | false   | == 0      |
//!
//! `Finished` is terminal until [`Countdown::reset`] is called.
//!
//! # Examples
//!
//! ```rust
//! use countdown_widget::countdown::{Countdown, Precision, TickOutcome};
//! use std::time::Duration;
//!
//! let mut countdown = Countdown::new(Duration::from_secs(2), false);
//! assert!(countdown.start());
//!
//! let step = Precision::Seconds.step();
//! assert_eq!(countdown.tick(step), TickOutcome::Ticked);
//! assert_eq!(countdown.tick(step), TickOutcome::Finished);
//! assert!(!countdown.running());
//! assert_eq!(countdown.tick(step), TickOutcome::Ignored);
//! ```

use std::fmt;
use std::time::Duration;

/// Display precision of the countdown.
///
/// Precision decides both how the remaining time is rendered and how often the
/// countdown ticks: each tick removes exactly one display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Whole seconds, one tick per second.
    #[default]
    Seconds,
    /// Hundredths of a second, one tick every 10ms.
    Hundredths,
}

impl Precision {
    /// Period between ticks.
    pub fn interval(self) -> Duration {
        match self {
            Precision::Seconds => Duration::from_millis(1000),
            Precision::Hundredths => Duration::from_millis(10),
        }
    }

    /// Amount of time removed by each tick.
    pub fn step(self) -> Duration {
        match self {
            Precision::Seconds => Duration::from_secs(1),
            Precision::Hundredths => Duration::from_millis(10),
        }
    }

    /// Whether the `.CC` hundredths suffix is shown.
    pub fn shows_hundredths(self) -> bool {
        matches!(self, Precision::Hundredths)
    }
}

/// Observable state of a [`Countdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Not counting, time left.
    Paused,
    /// Counting down.
    Running,
    /// Reached zero.
    Finished,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Paused => "paused",
            Status::Running => "running",
            Status::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Result of a single [`Countdown::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown was not running; nothing changed.
    Ignored,
    /// Time was removed and some remains.
    Ticked,
    /// This tick brought the countdown to zero.
    Finished,
}

/// A countdown from a configured duration to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration: Duration,
    remaining: Duration,
    running: bool,
}

impl Countdown {
    /// Creates a countdown at its full duration.
    ///
    /// With `auto_start` the countdown begins in the running state, unless the
    /// duration is zero.
    pub fn new(duration: Duration, auto_start: bool) -> Self {
        Self {
            duration,
            remaining: duration,
            running: auto_start && !duration.is_zero(),
        }
    }

    /// Rebuilds a countdown from stored state.
    ///
    /// `remaining` is clamped to `duration`, and a countdown with nothing
    /// left is never running.
    pub fn from_parts(duration: Duration, remaining: Duration, running: bool) -> Self {
        let remaining = remaining.min(duration);
        Self {
            duration,
            remaining,
            running: running && !remaining.is_zero(),
        }
    }

    /// The configured duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time left on the clock.
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Whether the countdown is counting.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Whether the countdown has reached zero.
    pub fn finished(&self) -> bool {
        self.remaining.is_zero()
    }

    /// The current state.
    pub fn status(&self) -> Status {
        if self.finished() {
            Status::Finished
        } else if self.running {
            Status::Running
        } else {
            Status::Paused
        }
    }

    /// Starts counting. Refused once the countdown has finished.
    ///
    /// Returns whether the countdown is running afterwards.
    pub fn start(&mut self) -> bool {
        if self.finished() {
            return false;
        }
        self.running = true;
        true
    }

    /// Stops counting, keeping the remaining time.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Starts when paused, pauses when running.
    ///
    /// Returns whether the countdown is running afterwards.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause();
            false
        } else {
            self.start()
        }
    }

    /// Restores the full duration and pauses.
    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.running = false;
    }

    /// Removes `step` from the remaining time, flooring at zero.
    ///
    /// Returns [`TickOutcome::Finished`] exactly once per run to zero: the tick
    /// that reaches zero also clears the running flag, so later ticks are
    /// [`TickOutcome::Ignored`].
    pub fn tick(&mut self, step: Duration) -> TickOutcome {
        if !self.running {
            return TickOutcome::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(step);
        if self.remaining.is_zero() {
            self.running = false;
            TickOutcome::Finished
        } else {
            TickOutcome::Ticked
        }
    }
}

/// Formats remaining time as `MM:SS`, or `MM:SS.CC` with hundredths.
///
/// Minutes are not wrapped into hours, so ten minutes renders as `10:00`.
/// Hundredths are floored, never rounded up.
///
/// ```rust
/// use countdown_widget::countdown::format_time;
/// use std::time::Duration;
///
/// assert_eq!(format_time(Duration::from_secs(65), false), "01:05");
/// assert_eq!(format_time(Duration::from_secs(65), true), "01:05.00");
/// assert_eq!(format_time(Duration::from_millis(1_239), true), "00:01.23");
/// assert_eq!(format_time(Duration::ZERO, false), "00:00");
/// ```
pub fn format_time(remaining: Duration, show_hundredths: bool) -> String {
    let whole_secs = remaining.as_secs();
    let minutes = whole_secs / 60;
    let seconds = whole_secs % 60;

    if show_hundredths {
        let hundredths = remaining.subsec_millis() / 10;
        format!("{:02}:{:02}.{:02}", minutes, seconds, hundredths)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_new_without_auto_start() {
        let countdown = Countdown::new(secs(60), false);
        assert_eq!(countdown.remaining(), secs(60));
        assert!(!countdown.running());
        assert_eq!(countdown.status(), Status::Paused);
    }

    #[test]
    fn test_new_with_auto_start() {
        let countdown = Countdown::new(secs(60), true);
        assert!(countdown.running());
        assert_eq!(countdown.status(), Status::Running);
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let mut countdown = Countdown::new(secs(10), false);
        assert_eq!(countdown.tick(secs(1)), TickOutcome::Ignored);
        assert_eq!(countdown.remaining(), secs(10));
    }

    #[test]
    fn test_finish_fires_once() {
        let mut countdown = Countdown::new(secs(5), true);
        let mut finished = 0;
        for _ in 0..20 {
            if countdown.tick(secs(1)) == TickOutcome::Finished {
                finished += 1;
            }
        }
        assert_eq!(finished, 1);
        assert_eq!(countdown.status(), Status::Finished);
        assert!(!countdown.running());
    }

    #[test]
    fn test_hundredths_reach_zero_exactly() {
        let mut countdown = Countdown::new(secs(5), true);
        let step = Precision::Hundredths.step();
        let mut ticks = 0;
        while countdown.tick(step) != TickOutcome::Finished {
            ticks += 1;
        }
        // 500 ticks of 10ms; the last one returns Finished
        assert_eq!(ticks, 499);
        assert_eq!(countdown.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_tick_floors_at_zero() {
        let mut countdown = Countdown::new(Duration::from_millis(500), true);
        assert_eq!(countdown.tick(secs(1)), TickOutcome::Finished);
        assert_eq!(countdown.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_start_refused_when_finished() {
        let mut countdown = Countdown::new(secs(5), true);
        countdown.tick(secs(5));
        assert!(countdown.finished());

        assert!(!countdown.start());
        assert!(!countdown.toggle());
        assert!(!countdown.running());
    }

    #[test]
    fn test_reset_leaves_finished_state() {
        let mut countdown = Countdown::new(secs(5), true);
        countdown.tick(secs(5));
        countdown.reset();

        assert_eq!(countdown.status(), Status::Paused);
        assert_eq!(countdown.remaining(), secs(5));
        assert!(countdown.start());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut once = Countdown::new(secs(30), true);
        once.tick(secs(1));
        once.reset();

        let mut twice = once.clone();
        twice.reset();

        assert_eq!(once, twice);
        assert_eq!(twice.remaining(), secs(30));
        assert!(!twice.running());
    }

    #[test]
    fn test_from_parts_enforces_invariants() {
        let clamped = Countdown::from_parts(secs(10), secs(30), false);
        assert_eq!(clamped.remaining(), secs(10));

        let finished = Countdown::from_parts(secs(10), Duration::ZERO, true);
        assert!(!finished.running());
        assert_eq!(finished.status(), Status::Finished);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut countdown = Countdown::new(secs(10), false);
        assert!(countdown.toggle());
        assert_eq!(countdown.status(), Status::Running);
        assert!(!countdown.toggle());
        assert_eq!(countdown.status(), Status::Paused);
    }

    #[test]
    fn test_precision_intervals() {
        assert_eq!(Precision::Seconds.interval(), Duration::from_millis(1000));
        assert_eq!(Precision::Hundredths.interval(), Duration::from_millis(10));
        assert!(!Precision::Seconds.shows_hundredths());
        assert!(Precision::Hundredths.shows_hundredths());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(secs(65), false), "01:05");
        assert_eq!(format_time(secs(65), true), "01:05.00");
        assert_eq!(format_time(Duration::ZERO, false), "00:00");
        assert_eq!(format_time(Duration::ZERO, true), "00:00.00");
        assert_eq!(format_time(secs(600), false), "10:00");
        assert_eq!(format_time(Duration::from_millis(59_990), true), "00:59.99");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Running.to_string(), "running");
        assert_eq!(Status::Finished.to_string(), "finished");
    }

    proptest! {
        #[test]
        fn prop_initial_state_matches_parameters(d in 5u64..=600, auto_start in any::<bool>()) {
            let countdown = Countdown::new(secs(d), auto_start);
            prop_assert_eq!(countdown.remaining(), secs(d));
            prop_assert_eq!(countdown.running(), auto_start);
        }

        #[test]
        fn prop_ticks_strictly_decrease_until_finished(d in 5u64..=600, fine in any::<bool>()) {
            let precision = if fine { Precision::Hundredths } else { Precision::Seconds };
            let mut countdown = Countdown::new(secs(d), true);
            let mut previous = countdown.remaining();
            loop {
                let outcome = countdown.tick(precision.step());
                prop_assert!(countdown.remaining() < previous);
                prop_assert!(countdown.remaining() <= countdown.duration());
                previous = countdown.remaining();
                if outcome == TickOutcome::Finished {
                    break;
                }
                prop_assert_eq!(outcome, TickOutcome::Ticked);
            }
            prop_assert!(!countdown.running());
            prop_assert_eq!(countdown.tick(precision.step()), TickOutcome::Ignored);
            prop_assert_eq!(countdown.remaining(), Duration::ZERO);
        }
    }
}
