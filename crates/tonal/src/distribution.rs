//! Intensity distributions produced by image analysis.
//!
//! A distribution always has exactly [`BINS`] entries, one per 8-bit level.
//! Once constructed it is never mutated; consumers only read it.

use crate::error::{HistogramError, HistogramResult};

/// Number of intensity levels in an 8-bit channel.
pub const BINS: usize = 256;

/// Highest intensity level (and highest threshold).
pub const MAX_LEVEL: u8 = 255;

/// Non-negative count (or density) per intensity level.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityDistribution {
    bins: Box<[f64; BINS]>,
}

impl IntensityDistribution {
    /// An all-zero distribution.
    pub fn zeroed() -> Self {
        Self {
            bins: Box::new([0.0; BINS]),
        }
    }

    /// Build from raw per-level values.
    ///
    /// Fails if any value is negative, NaN or infinite.
    pub fn from_bins(bins: [f64; BINS]) -> HistogramResult<Self> {
        if let Some((level, value)) = bins
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(HistogramError::InvalidDistribution {
                reason: format!("level {} has value {}", level, value),
            });
        }
        Ok(Self {
            bins: Box::new(bins),
        })
    }

    /// Build from pixel counts. Always valid.
    pub fn from_counts(counts: &[u32; BINS]) -> Self {
        let mut bins = Box::new([0.0; BINS]);
        for (bin, &count) in bins.iter_mut().zip(counts.iter()) {
            *bin = f64::from(count);
        }
        Self { bins }
    }

    /// Value at an intensity level.
    #[inline]
    pub fn get(&self, level: u8) -> f64 {
        self.bins[level as usize]
    }

    /// All values, indexed by level.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.bins[..]
    }

    /// Largest value across all levels.
    pub fn max(&self) -> f64 {
        self.bins.iter().copied().fold(0.0, f64::max)
    }

    /// Smallest non-zero bin, if any.
    pub fn min_positive(&self) -> Option<f64> {
        self.bins
            .iter()
            .copied()
            .filter(|&v| v > 0.0)
            .min_by(f64::total_cmp)
    }

    /// Sum of all values (the pixel count for a count histogram).
    pub fn total(&self) -> f64 {
        self.bins.iter().sum()
    }
}

impl Default for IntensityDistribution {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl TryFrom<&[f64]> for IntensityDistribution {
    type Error = HistogramError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let bins: [f64; BINS] =
            values
                .try_into()
                .map_err(|_| HistogramError::InvalidDistribution {
                    reason: format!("expected {} bins, got {}", BINS, values.len()),
                })?;
        Self::from_bins(bins)
    }
}

impl TryFrom<Vec<f64>> for IntensityDistribution {
    type Error = HistogramError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(values.as_slice())
    }
}

/// Grayscale distribution together with the maximum its axis is scaled to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GrayscaleHistogram {
    pub distribution: IntensityDistribution,
    pub max: f64,
}

impl GrayscaleHistogram {
    /// Pair a distribution with an analysis-supplied maximum.
    pub fn new(distribution: IntensityDistribution, max: f64) -> Self {
        Self { distribution, max }
    }

    /// Use the distribution's own peak as the maximum.
    pub fn from_distribution(distribution: IntensityDistribution) -> Self {
        let max = distribution.max();
        Self { distribution, max }
    }
}

/// One color channel of an RGB image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in drawing order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

/// Per-channel distributions sharing one maximum for common scaling.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChannelDistributionSet {
    pub red: IntensityDistribution,
    pub green: IntensityDistribution,
    pub blue: IntensityDistribution,
    pub max: f64,
}

impl ChannelDistributionSet {
    /// Group three distributions with an analysis-supplied maximum.
    pub fn new(
        red: IntensityDistribution,
        green: IntensityDistribution,
        blue: IntensityDistribution,
        max: f64,
    ) -> Self {
        Self {
            red,
            green,
            blue,
            max,
        }
    }

    /// Use the peak across all three channels as the shared maximum.
    pub fn from_distributions(
        red: IntensityDistribution,
        green: IntensityDistribution,
        blue: IntensityDistribution,
    ) -> Self {
        let max = red.max().max(green.max()).max(blue.max());
        Self::new(red, green, blue, max)
    }

    /// Distribution for a single channel.
    pub fn get(&self, channel: Channel) -> &IntensityDistribution {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }
}
