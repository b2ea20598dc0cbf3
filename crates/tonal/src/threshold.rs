//! The authoritative threshold value.

use crate::error::{HistogramError, HistogramResult};

/// Which input surface produced a threshold change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOrigin {
    Slider,
    Text,
}

/// Result of handling one threshold input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdChange {
    /// Canonical value after the input was handled.
    pub value: u8,
    /// Where the input came from.
    pub origin: InputOrigin,
    /// `true` if the input was rejected and the value collapsed to 0.
    pub coerced: bool,
}

/// Parse threshold text.
///
/// Surrounding whitespace and a leading sign are accepted. Anything that is
/// not an integer in `0..=255` is an [`HistogramError::InvalidThresholdInput`].
pub fn parse_threshold(raw: &str) -> HistogramResult<u8> {
    let invalid = || HistogramError::InvalidThresholdInput {
        input: raw.to_string(),
    };
    let parsed: i64 = raw.trim().parse().map_err(|_| invalid())?;
    u8::try_from(parsed).map_err(|_| invalid())
}

/// Holds the single threshold value, always in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThresholdController {
    value: u8,
}

impl ThresholdController {
    pub fn new(value: u8) -> Self {
        Self { value }
    }

    /// Current threshold.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Accept a slider position. The slider's own range is `0..=255`.
    pub fn set_from_slider(&mut self, raw: u8) -> ThresholdChange {
        self.value = raw;
        ThresholdChange {
            value: self.value,
            origin: InputOrigin::Slider,
            coerced: false,
        }
    }

    /// Accept text-field contents.
    ///
    /// Unparseable or out-of-range text resets the threshold to 0 rather than
    /// clamping to the nearest bound.
    pub fn set_from_text(&mut self, raw: &str) -> ThresholdChange {
        let (value, coerced) = match parse_threshold(raw) {
            Ok(value) => (value, false),
            Err(err) => {
                tracing::warn!("{}; resetting threshold to 0", err);
                (0, true)
            }
        };
        self.value = value;
        ThresholdChange {
            value,
            origin: InputOrigin::Text,
            coerced,
        }
    }
}
