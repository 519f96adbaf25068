//! Application error types.
//!
//! Line-level classification never produces an error. These variants cover
//! explicit chord parsing, user-supplied keys, configuration and file I/O.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// A token that looks like a chord but does not decompose into root, suffix and bass
    #[error("Invalid chord: {token}")]
    MalformedChord {
        /// The offending token text.
        token: String,
    },

    /// A key spelling that is not one of the 17 recognized note names
    #[error("Unknown key '{input}'. Expected a note such as C, F#, Eb or bb")]
    UnknownKey {
        /// The key text as supplied by the caller.
        input: String,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a malformed chord error for the given token
    pub fn malformed(token: impl Into<String>) -> Self {
        Self::MalformedChord { token: token.into() }
    }

    /// Create an unknown key error for the given input
    pub fn unknown_key(input: impl Into<String>) -> Self {
        Self::UnknownKey { input: input.into() }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_unknown_key_message_names_input() {
        let err = Error::unknown_key("H#");
        assert!(err.to_string().contains("'H#'"));
    }

    #[test]
    fn test_config_error_includes_hint() {
        let err = Error::config("CHART_MAX_WIDTH is not a number", "Set it to a positive integer");
        match &err {
            Error::Config { hint, .. } => assert!(hint.contains("positive")),
            _ => panic!("Expected Config error"),
        }
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_io_conversion_has_no_path() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io { path: None, .. }));
    }
}
