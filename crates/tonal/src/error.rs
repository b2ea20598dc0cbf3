//! Error types for the histogram display.

use crate::source::ContextId;
use std::fmt;

/// Errors that can occur while driving a histogram display.
#[derive(Debug, Clone, PartialEq)]
pub enum HistogramError {
    /// No image context is focused, so there is no distribution to read.
    NoActiveImage,

    /// The data source focuses a different image than the one the display
    /// was populated from.
    StaleContext {
        /// Context the display holds series for.
        loaded: ContextId,
        /// Context the data source currently reports.
        focused: Option<ContextId>,
    },

    /// Threshold text could not be parsed as an integer in `0..=255`.
    InvalidThresholdInput {
        /// The text as entered.
        input: String,
    },

    /// Distribution data handed over by the analysis side is malformed.
    InvalidDistribution {
        /// Description of what is wrong.
        reason: String,
    },
}

impl fmt::Display for HistogramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistogramError::NoActiveImage => write!(f, "No active image context"),
            HistogramError::StaleContext { loaded, focused } => write!(
                f,
                "Display holds context {} but the source focuses {}",
                loaded.raw(),
                focused.map_or_else(|| "nothing".to_string(), |c| c.raw().to_string())
            ),
            HistogramError::InvalidThresholdInput { input } => {
                write!(f, "Invalid threshold input: '{}' (expected 0-255)", input)
            }
            HistogramError::InvalidDistribution { reason } => {
                write!(f, "Invalid intensity distribution: {}", reason)
            }
        }
    }
}

impl std::error::Error for HistogramError {}

/// Result type alias for histogram operations.
pub type HistogramResult<T> = Result<T, HistogramError>;
