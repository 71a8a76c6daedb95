//! Crate-level error types.

use std::fmt;

/// Errors produced by the camframe crate.
///
/// Geometric degeneracies (parallel planes, empty boxes) are not errors;
/// those queries return `Option`.
#[derive(Debug)]
pub enum CamframeError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Persisted camera state that cannot describe a valid camera.
    InvalidState(String),
}

impl fmt::Display for CamframeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidState(msg) => {
                write!(f, "invalid camera state: {msg}")
            }
        }
    }
}

impl std::error::Error for CamframeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CamframeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
