//! Typed, resolved widget parameters.
//!
//! [`Parameters`] is what the presenter reads. It mirrors
//! [`widget_definition`](crate::schema::widget_definition) field for field and
//! serializes with the same camelCase names, so a host can hand it over either
//! as a [`Values`] map or as a serialized document (see [`crate::config`]).
//!
//! Fields that only matter in [`Mode::Advanced`] are kept as supplied but are
//! read through accessors such as [`Parameters::sound_enabled`], which ignore
//! them in [`Mode::Simple`].

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::countdown::Precision;
use crate::schema::{widget_definition, Values};

/// Completion message shown in simple mode, and the default in advanced mode.
pub const DEFAULT_COMPLETION_MESSAGE: &str = "⏰ Time's up!";

/// Widget mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// The basic countdown.
    #[default]
    Simple,
    /// Enables hundredths display, sound and a custom completion message.
    Advanced,
}

impl Mode {
    /// The option string used by the schema.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Simple => "Simple",
            Mode::Advanced => "Advanced",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "Simple" => Some(Mode::Simple),
            "Advanced" => Some(Mode::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Colors {
    /// Color of the clock digits.
    pub timer_color: String,
    /// Widget background.
    pub background_color: String,
    /// Start/pause button background.
    pub button_color: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            timer_color: "#1f2937".to_string(),
            background_color: "#ffffff".to_string(),
            button_color: "#000000".to_string(),
        }
    }
}

/// Background image settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Background {
    /// Image reference; empty for none.
    pub image_url: String,
    /// Image opacity in `0.0..=1.0`.
    pub opacity: f64,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            image_url: String::new(),
            opacity: 0.3,
        }
    }
}

/// Size and spacing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Layout {
    /// Clock font size in pixels.
    pub font_size: f64,
    /// Padding around the content in pixels.
    pub padding: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            font_size: 80.0,
            padding: 16.0,
        }
    }
}

/// The `appearance` folder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Appearance {
    /// Colors.
    pub colors: Colors,
    /// Background image.
    pub background: Background,
    /// Layout.
    pub layout: Layout,
}

/// The `advanced` folder. Inert unless the mode is [`Mode::Advanced`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Advanced {
    /// Play a tone on completion.
    pub enable_sound: bool,
    /// Message shown on completion.
    pub completion_message: String,
}

impl Default for Advanced {
    fn default() -> Self {
        Self {
            enable_sound: false,
            completion_message: DEFAULT_COMPLETION_MESSAGE.to_string(),
        }
    }
}

/// The full set of widget parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Parameters {
    /// Simple or advanced mode.
    pub mode: Mode,
    /// Heading above the clock.
    pub title: String,
    /// Countdown length in seconds.
    pub duration: f64,
    /// Start counting immediately.
    pub auto_start: bool,
    /// Show hundredths of a second. Advanced mode only.
    pub show_milliseconds: bool,
    /// Visual settings.
    pub appearance: Appearance,
    /// Advanced-only settings.
    pub advanced: Advanced,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            mode: Mode::Simple,
            title: "Focus time!".to_string(),
            duration: 60.0,
            auto_start: false,
            show_milliseconds: false,
            appearance: Appearance::default(),
            advanced: Advanced::default(),
        }
    }
}

const MODE: &str = "mode";
const TITLE: &str = "title";
const DURATION: &str = "duration";
const AUTO_START: &str = "autoStart";
const SHOW_MILLISECONDS: &str = "showMilliseconds";
const TIMER_COLOR: &str = "appearance.colors.timerColor";
const BACKGROUND_COLOR: &str = "appearance.colors.backgroundColor";
const BUTTON_COLOR: &str = "appearance.colors.buttonColor";
const IMAGE_URL: &str = "appearance.background.imageUrl";
const OPACITY: &str = "appearance.background.opacity";
const FONT_SIZE: &str = "appearance.layout.fontSize";
const PADDING: &str = "appearance.layout.padding";
const ENABLE_SOUND: &str = "advanced.enableSound";
const COMPLETION_MESSAGE: &str = "advanced.completionMessage";

impl Parameters {
    /// Builds parameters from a value map, falling back to the schema
    /// default for anything missing or of the wrong type.
    pub fn from_values(values: &Values) -> Self {
        let d = Parameters::default();
        let text = |path: &str, fallback: &str| values.text(path).unwrap_or(fallback).to_string();
        let number = |path: &str, fallback: f64| values.number(path).unwrap_or(fallback);
        let flag = |path: &str, fallback: bool| values.bool(path).unwrap_or(fallback);

        Self {
            mode: values.text(MODE).and_then(Mode::parse).unwrap_or(d.mode),
            title: text(TITLE, &d.title),
            duration: number(DURATION, d.duration),
            auto_start: flag(AUTO_START, d.auto_start),
            show_milliseconds: flag(SHOW_MILLISECONDS, d.show_milliseconds),
            appearance: Appearance {
                colors: Colors {
                    timer_color: text(TIMER_COLOR, &d.appearance.colors.timer_color),
                    background_color: text(
                        BACKGROUND_COLOR,
                        &d.appearance.colors.background_color,
                    ),
                    button_color: text(BUTTON_COLOR, &d.appearance.colors.button_color),
                },
                background: Background {
                    image_url: text(IMAGE_URL, &d.appearance.background.image_url),
                    opacity: number(OPACITY, d.appearance.background.opacity),
                },
                layout: Layout {
                    font_size: number(FONT_SIZE, d.appearance.layout.font_size),
                    padding: number(PADDING, d.appearance.layout.padding),
                },
            },
            advanced: Advanced {
                enable_sound: flag(ENABLE_SOUND, d.advanced.enable_sound),
                completion_message: text(COMPLETION_MESSAGE, &d.advanced.completion_message),
            },
        }
    }

    /// Flattens the parameters into a value map keyed by schema path.
    pub fn to_values(&self) -> Values {
        Values::new()
            .with(MODE, self.mode.as_str())
            .with(TITLE, self.title.as_str())
            .with(DURATION, self.duration)
            .with(AUTO_START, self.auto_start)
            .with(SHOW_MILLISECONDS, self.show_milliseconds)
            .with(TIMER_COLOR, self.appearance.colors.timer_color.as_str())
            .with(BACKGROUND_COLOR, self.appearance.colors.background_color.as_str())
            .with(BUTTON_COLOR, self.appearance.colors.button_color.as_str())
            .with(IMAGE_URL, self.appearance.background.image_url.as_str())
            .with(OPACITY, self.appearance.background.opacity)
            .with(FONT_SIZE, self.appearance.layout.font_size)
            .with(PADDING, self.appearance.layout.padding)
            .with(ENABLE_SOUND, self.advanced.enable_sound)
            .with(COMPLETION_MESSAGE, self.advanced.completion_message.as_str())
    }

    /// Checks the parameters against the widget schema.
    pub fn validate(&self) -> Result<(), crate::error::SchemaError> {
        widget_definition().validate(&self.to_values())
    }

    /// The configured duration. Non-finite or negative values map to zero.
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.duration).unwrap_or(Duration::ZERO)
    }

    /// Whether hundredths are displayed. Always false in simple mode.
    pub fn show_milliseconds(&self) -> bool {
        self.mode == Mode::Advanced && self.show_milliseconds
    }

    /// Display precision, which also sets the tick rate.
    pub fn precision(&self) -> Precision {
        if self.show_milliseconds() {
            Precision::Hundredths
        } else {
            Precision::Seconds
        }
    }

    /// Whether a tone plays on completion. Always false in simple mode.
    pub fn sound_enabled(&self) -> bool {
        self.mode == Mode::Advanced && self.advanced.enable_sound
    }

    /// Message shown once the countdown finishes.
    pub fn completion_message(&self) -> &str {
        match self.mode {
            Mode::Advanced => &self.advanced.completion_message,
            Mode::Simple => DEFAULT_COMPLETION_MESSAGE,
        }
    }
}
