//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::GpuInitError;

/// Errors produced by the planetscape crate.
#[derive(Debug)]
pub enum PlanetscapeError {
    /// GPU context initialization failure.
    Gpu(GpuInitError),
    /// WGSL composition or validation failure.
    Shader(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A key binding string that does not describe a key chord.
    InvalidKeyChord(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for PlanetscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Shader(msg) => write!(f, "shader error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidKeyChord(chord) => {
                write!(f, "invalid key chord: {chord:?}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for PlanetscapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GpuInitError> for PlanetscapeError {
    fn from(e: GpuInitError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for PlanetscapeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err = PlanetscapeError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing.toml",
        ));
        assert!(err.to_string().contains("missing.toml"));
        assert!(err.source().is_some());
    }

    #[test]
    fn key_chord_errors_quote_the_input() {
        let err = PlanetscapeError::InvalidKeyChord("Shift+".into());
        assert_eq!(err.to_string(), "invalid key chord: \"Shift+\"");
        assert!(err.source().is_none());
    }
}
