//! Loading parameter values retained by the host.
//!
//! Hosts that keep widget settings between sessions can store them as TOML
//! using the schema's field names:
//!
//! ```toml
//! mode = "Advanced"
//! title = "Tea"
//! duration = 180
//! autoStart = true
//!
//! [appearance.colors]
//! timerColor = "#16a34a"
//!
//! [advanced]
//! enableSound = true
//! completionMessage = "Tea is ready"
//! ```
//!
//! Missing fields take their schema defaults. Parsed values are validated
//! against [`widget_definition`](crate::schema::widget_definition) before they
//! are returned, so the widget only ever sees in-bounds parameters.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::params::Parameters;

/// Environment variable naming a parameter file for the demo application.
pub const PARAMS_ENV_VAR: &str = "COUNTDOWN_PARAMS";

/// Parses and validates parameters from a TOML document.
///
/// ```rust
/// use countdown_widget::config::from_toml_str;
/// use std::time::Duration;
///
/// let params = from_toml_str("duration = 90\nautoStart = true").unwrap();
/// assert_eq!(params.duration(), Duration::from_secs(90));
/// assert!(params.auto_start);
///
/// assert!(from_toml_str("duration = 900").is_err());
/// ```
pub fn from_toml_str(contents: &str) -> Result<Parameters, ConfigError> {
    let params: Parameters = toml::from_str(contents)?;
    params.validate()?;
    Ok(params)
}

/// Reads, parses and validates a parameter file.
pub fn load(path: impl AsRef<Path>) -> Result<Parameters, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let params = from_toml_str(&contents)?;
    tracing::debug!(path = %path.display(), "loaded widget parameters");
    Ok(params)
}

/// Loads parameters from the file named by [`PARAMS_ENV_VAR`], or the
/// defaults when the variable is unset.
pub fn load_from_env() -> Result<Parameters, ConfigError> {
    match std::env::var_os(PARAMS_ENV_VAR) {
        Some(path) => load(path),
        None => Ok(Parameters::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Mode;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn test_empty_document_yields_defaults() {
        assert_eq!(from_toml_str("").unwrap(), Parameters::default());
    }

    #[test]
    fn test_nested_tables() {
        let params = from_toml_str(
            r##"
            mode = "Advanced"
            showMilliseconds = true

            [appearance.colors]
            timerColor = "#16a34a"

            [appearance.layout]
            padding = 8

            [advanced]
            enableSound = true
            completionMessage = "Tea is ready"
            "##,
        )
        .unwrap();

        assert_eq!(params.mode, Mode::Advanced);
        assert!(params.show_milliseconds());
        assert_eq!(params.appearance.colors.timer_color, "#16a34a");
        assert_eq!(params.appearance.colors.button_color, "#000000");
        assert_eq!(params.appearance.layout.padding, 8.0);
        assert_eq!(params.appearance.layout.font_size, 80.0);
        assert!(params.sound_enabled());
        assert_eq!(params.completion_message(), "Tea is ready");
    }

    #[test]
    fn test_integer_duration_is_accepted() {
        let params = from_toml_str("duration = 300").unwrap();
        assert_eq!(params.duration(), Duration::from_secs(300));
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let err = from_toml_str("[appearance.background]\nopacity = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Schema(_)));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = from_toml_str("durration = 30").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_bad_mode_is_rejected() {
        let err = from_toml_str("mode = \"Expert\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load("/nonexistent/countdown.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!(
            "countdown-widget-config-{}.toml",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "title = \"Stretch\"\nduration = 45").unwrap();
        drop(file);

        let params = load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(params.title, "Stretch");
        assert_eq!(params.duration(), Duration::from_secs(45));
    }
}
