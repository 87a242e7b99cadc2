//! Error types for icon generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for icon generation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing the icon set
#[derive(Error, Debug)]
pub enum Error {
    /// The PNG backend was not compiled into this binary
    #[error("PNG backend not available (built without the `{feature}` feature)")]
    MissingCapability { feature: &'static str },

    /// Acquiring the PNG backend did not succeed
    #[error("Failed to install the PNG backend ({command}): {reason}")]
    InstallFailure { command: String, reason: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding a rendered canvas failed
    #[error("Failed to encode {size}x{size} icon: {reason}")]
    Encode { size: u32, reason: String },

    /// A colour string could not be parsed as a CSS colour
    #[error("Invalid colour {value:?}: {reason}")]
    Color { value: String, reason: String },

    #[error("Failed to serialize manifest icons: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the imaging capability itself is absent, as opposed to a
    /// failure while using it.
    pub fn is_missing_capability(&self) -> bool {
        matches!(self, Error::MissingCapability { .. })
    }
}
