//! In-memory histogram source.

use parking_lot::Mutex;
use tonal::{
    BINS, ChannelDistributionSet, ContextId, GrayscaleHistogram, HistogramDataSource,
    HistogramError, HistogramResult, IntensityDistribution,
};

/// Records a data source call for verification in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceCall {
    FetchGrayscale,
    FetchChannels,
}

/// Canned histogram data standing in for one analyzed image.
#[derive(Debug, Clone, PartialEq)]
pub struct StubImage {
    pub grayscale: GrayscaleHistogram,
    pub channels: ChannelDistributionSet,
}

impl StubImage {
    /// Every level holds `count`, in all channels.
    pub fn flat(count: f64) -> Self {
        let dist = IntensityDistribution::from_bins([count; BINS])
            .unwrap_or_else(|_| IntensityDistribution::zeroed());
        Self::uniform_channels(dist)
    }

    /// A single spike of `height` at `level`, in all channels.
    pub fn peak(level: u8, height: f64) -> Self {
        let mut bins = [0.0; BINS];
        bins[level as usize] = height;
        let dist =
            IntensityDistribution::from_bins(bins).unwrap_or_else(|_| IntensityDistribution::zeroed());
        Self::uniform_channels(dist)
    }

    /// Distinct red, green and blue spikes with the given heights.
    pub fn rgb_peaks(red: f64, green: f64, blue: f64) -> Self {
        let spike = |level: usize, height: f64| {
            let mut bins = [0.0; BINS];
            bins[level] = height;
            IntensityDistribution::from_bins(bins).unwrap_or_else(|_| IntensityDistribution::zeroed())
        };
        let mut gray = [0.0; BINS];
        gray[128] = red + green + blue;
        let grayscale = GrayscaleHistogram::from_distribution(
            IntensityDistribution::from_bins(gray).unwrap_or_else(|_| IntensityDistribution::zeroed()),
        );
        Self {
            grayscale,
            channels: ChannelDistributionSet::from_distributions(
                spike(200, red),
                spike(100, green),
                spike(50, blue),
            ),
        }
    }

    fn uniform_channels(dist: IntensityDistribution) -> Self {
        Self {
            grayscale: GrayscaleHistogram::from_distribution(dist.clone()),
            channels: ChannelDistributionSet::from_distributions(dist.clone(), dist.clone(), dist),
        }
    }
}

/// Data source backed by a [`StubImage`], counting every fetch.
#[derive(Debug, Default)]
pub struct StubHistogramSource {
    active: Option<(ContextId, StubImage)>,
    calls: Mutex<Vec<SourceCall>>,
}

impl StubHistogramSource {
    /// A source with no focused image.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A source focused on `image`.
    pub fn with_image(image: StubImage) -> Self {
        let mut source = Self::default();
        source.focus(image);
        source
    }

    /// Focus a new image under a fresh context ID.
    pub fn focus(&mut self, image: StubImage) -> ContextId {
        let context = ContextId::next();
        self.active = Some((context, image));
        context
    }

    /// Drop the focused image.
    pub fn unfocus(&mut self) {
        self.active = None;
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.lock().clone()
    }

    pub fn count_grayscale_fetches(&self) -> usize {
        self.count(SourceCall::FetchGrayscale)
    }

    pub fn count_channel_fetches(&self) -> usize {
        self.count(SourceCall::FetchChannels)
    }

    fn count(&self, call: SourceCall) -> usize {
        self.calls.lock().iter().filter(|c| **c == call).count()
    }

    /// Forget recorded calls.
    pub fn reset_calls(&self) {
        self.calls.lock().clear();
    }

    fn image(&self) -> HistogramResult<&StubImage> {
        self.active
            .as_ref()
            .map(|(_, image)| image)
            .ok_or(HistogramError::NoActiveImage)
    }
}

impl HistogramDataSource for StubHistogramSource {
    fn context(&self) -> Option<ContextId> {
        self.active.as_ref().map(|(context, _)| *context)
    }

    fn fetch_grayscale(&self) -> HistogramResult<GrayscaleHistogram> {
        self.calls.lock().push(SourceCall::FetchGrayscale);
        Ok(self.image()?.grayscale.clone())
    }

    fn fetch_channels(&self) -> HistogramResult<ChannelDistributionSet> {
        self.calls.lock().push(SourceCall::FetchChannels);
        Ok(self.image()?.channels.clone())
    }
}
