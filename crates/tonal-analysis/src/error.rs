//! Error types for image loading.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while loading an image for analysis.
#[derive(Debug)]
pub enum AnalysisError {
    /// Failed to read the image file.
    Io {
        /// The path that failed to load.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The file was read but could not be decoded.
    Decode {
        /// The path being decoded.
        path: PathBuf,
        /// The underlying decoder error.
        source: image::ImageError,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Io { path, source } => {
                write!(f, "IO error loading '{}': {}", path.display(), source)
            }
            AnalysisError::Decode { path, source } => {
                write!(f, "Failed to decode '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Io { source, .. } => Some(source),
            AnalysisError::Decode { source, .. } => Some(source),
        }
    }
}

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
