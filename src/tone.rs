//! Completion tone playback.
//!
//! Playing the tone is best effort. A [`TonePlayer`] reports failures, but the
//! widget only logs them; a missing sound card never changes how the
//! countdown behaves.
//!
//! Three players are provided:
//!
//! - [`Silent`] plays nothing,
//! - [`TerminalBell`] rings the terminal bell,
//! - `SynthPlayer` synthesizes the tone on the default audio device
//!   (requires the `sound` feature).
//!
//! [`default_player`] picks the richest one compiled in.

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{execute, style::Print};

use crate::error::ToneError;

/// A fixed-frequency tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Frequency in hertz.
    pub frequency_hz: f32,
    /// How long the tone sounds.
    pub duration: Duration,
}

impl Tone {
    /// The tone played when a countdown finishes: 800Hz for 200ms.
    pub const COMPLETION: Tone = Tone {
        frequency_hz: 800.0,
        duration: Duration::from_millis(200),
    };
}

/// Something that can sound a [`Tone`].
///
/// Implementations must not block the caller for the length of the tone.
pub trait TonePlayer: Send {
    /// Starts playing `tone`.
    fn play(&self, tone: Tone) -> Result<(), ToneError>;
}

impl fmt::Debug for dyn TonePlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TonePlayer")
    }
}

/// A player that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl TonePlayer for Silent {
    fn play(&self, _tone: Tone) -> Result<(), ToneError> {
        Ok(())
    }
}

/// Rings the terminal bell. The terminal decides pitch and length.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl TonePlayer for TerminalBell {
    fn play(&self, _tone: Tone) -> Result<(), ToneError> {
        let mut stdout = io::stdout();
        execute!(stdout, Print('\x07'))?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(feature = "sound")]
pub use synth::SynthPlayer;

#[cfg(feature = "sound")]
mod synth {
    use rodio::source::{SineWave, Source};
    use rodio::{OutputStream, Sink};

    use super::{Tone, TonePlayer};
    use crate::error::ToneError;

    const VOLUME: f32 = 0.2;

    /// Synthesizes a sine tone on the default output device.
    ///
    /// Each tone plays on its own short-lived thread, since the output
    /// stream has to stay alive until playback ends.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SynthPlayer;

    impl TonePlayer for SynthPlayer {
        fn play(&self, tone: Tone) -> Result<(), ToneError> {
            std::thread::Builder::new()
                .name("countdown-tone".to_string())
                .spawn(move || {
                    if let Err(err) = play_blocking(tone) {
                        tracing::debug!(error = %err, "completion tone skipped");
                    }
                })?;
            Ok(())
        }
    }

    fn play_blocking(tone: Tone) -> Result<(), ToneError> {
        let (_stream, handle) =
            OutputStream::try_default().map_err(|e| ToneError::NoOutput(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| ToneError::Playback(e.to_string()))?;
        sink.append(
            SineWave::new(tone.frequency_hz)
                .take_duration(tone.duration)
                .amplify(VOLUME),
        );
        sink.sleep_until_end();
        Ok(())
    }
}

/// The best player available in this build.
#[cfg(feature = "sound")]
pub fn default_player() -> Box<dyn TonePlayer> {
    Box::new(SynthPlayer)
}

/// The best player available in this build.
#[cfg(not(feature = "sound"))]
pub fn default_player() -> Box<dyn TonePlayer> {
    Box::new(TerminalBell)
}

/// Plays `tone`, logging instead of returning any failure.
pub fn play_best_effort(player: &dyn TonePlayer, tone: Tone) {
    match player.play(tone) {
        Ok(()) => tracing::trace!(frequency_hz = tone.frequency_hz, "completion tone"),
        Err(err) => tracing::debug!(error = %err, "completion tone skipped"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl TonePlayer for Broken {
        fn play(&self, _tone: Tone) -> Result<(), ToneError> {
            Err(ToneError::NoOutput("no device".to_string()))
        }
    }

    #[test]
    fn test_completion_tone() {
        assert_eq!(Tone::COMPLETION.frequency_hz, 800.0);
        assert_eq!(Tone::COMPLETION.duration, Duration::from_millis(200));
    }

    #[test]
    fn test_silent_player() {
        assert!(Silent.play(Tone::COMPLETION).is_ok());
    }

    #[test]
    fn test_best_effort_swallows_errors() {
        // Must not panic
        play_best_effort(&Broken, Tone::COMPLETION);
    }
}
