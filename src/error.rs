//! Error types for parameter validation, configuration loading and tone playback.
//!
//! The countdown state machine itself never fails. Errors only arise at the
//! edges: values that violate the parameter schema, parameter files that
//! cannot be read or parsed, and audio output that is not available.

use std::path::PathBuf;

use thiserror::Error;

/// A parameter value that does not satisfy the declared schema.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// The value names a field the schema does not declare.
    #[error("unknown parameter '{0}'")]
    UnknownField(String),

    /// The value has the wrong type for the field.
    #[error("parameter '{field}' expects a {expected} value")]
    TypeMismatch {
        /// Dotted path of the field.
        field: String,
        /// Human-readable name of the expected kind.
        expected: &'static str,
    },

    /// A numeric value lies outside the declared `[min, max]` range.
    #[error("parameter '{field}' is {value}, outside {min}..={max}")]
    OutOfBounds {
        /// Dotted path of the field.
        field: String,
        /// The rejected value.
        value: f64,
        /// Declared lower bound.
        min: f64,
        /// Declared upper bound.
        max: f64,
    },

    /// A select field received a value that is not one of its options.
    #[error("parameter '{field}' must be one of [{options}], got '{value}'")]
    InvalidOption {
        /// Dotted path of the field.
        field: String,
        /// The rejected value.
        value: String,
        /// Comma-separated list of accepted options.
        options: String,
    },
}

/// Failure to load widget parameters from a file or string.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The parameter file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The parameter document is not valid TOML or has the wrong shape.
    #[error("failed to parse parameters: {0}")]
    Parse(#[from] toml::de::Error),

    /// The parameters parsed but violate the schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Failure to produce the completion tone.
///
/// Never surfaced to the user: the widget logs it and carries on.
#[derive(Debug, Error)]
pub enum ToneError {
    /// No audio output device is available.
    #[error("no audio output available: {0}")]
    NoOutput(String),

    /// The output device rejected playback.
    #[error("tone playback failed: {0}")]
    Playback(String),

    /// Writing to the terminal failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = SchemaError::OutOfBounds {
            field: "duration".to_string(),
            value: 700.0,
            min: 5.0,
            max: 600.0,
        };
        assert_eq!(
            err.to_string(),
            "parameter 'duration' is 700, outside 5..=600"
        );
    }

    #[test]
    fn test_schema_error_converts_to_config_error() {
        let err: ConfigError = SchemaError::UnknownField("colour".to_string()).into();
        assert!(matches!(err, ConfigError::Schema(_)));
        assert_eq!(err.to_string(), "unknown parameter 'colour'");
    }
}
