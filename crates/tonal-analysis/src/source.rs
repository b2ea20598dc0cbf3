//! Data source serving the focused image's histograms.

use crate::analysis::ImageAnalysis;
use crate::error::AnalysisResult;
use image::DynamicImage;
use std::path::Path;
use tonal::{
    ChannelDistributionSet, ContextId, GrayscaleHistogram, HistogramDataSource, HistogramError,
    HistogramResult,
};

/// Tracks which image is focused and hands its histograms to a display.
///
/// Every focus change mints a fresh [`ContextId`], even when the same image is
/// focused again, so the display rebuilds its series.
#[derive(Debug, Default)]
pub struct AnalysisSource {
    active: Option<(ContextId, ImageAnalysis)>,
}

impl AnalysisSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus a decoded image.
    pub fn focus(&mut self, image: DynamicImage) -> ContextId {
        self.focus_analysis(ImageAnalysis::new(image))
    }

    /// Focus an existing analysis, keeping its caches.
    pub fn focus_analysis(&mut self, analysis: ImageAnalysis) -> ContextId {
        let context = ContextId::next();
        tracing::debug!(
            "Focused {}x{} image as context {}",
            analysis.width(),
            analysis.height(),
            context.raw()
        );
        self.active = Some((context, analysis));
        context
    }

    /// Decode and focus an image file.
    ///
    /// On error the previous focus is kept.
    pub fn open(&mut self, path: impl AsRef<Path>) -> AnalysisResult<ContextId> {
        let analysis = ImageAnalysis::open(path)?;
        Ok(self.focus_analysis(analysis))
    }

    /// Drop the focused image, returning its analysis.
    pub fn clear(&mut self) -> Option<ImageAnalysis> {
        self.active.take().map(|(_, analysis)| analysis)
    }

    /// The focused analysis.
    pub fn active(&self) -> Option<&ImageAnalysis> {
        self.active.as_ref().map(|(_, analysis)| analysis)
    }

    fn require_active(&self) -> HistogramResult<&ImageAnalysis> {
        self.active().ok_or(HistogramError::NoActiveImage)
    }
}

impl HistogramDataSource for AnalysisSource {
    fn context(&self) -> Option<ContextId> {
        self.active.as_ref().map(|(context, _)| *context)
    }

    fn fetch_grayscale(&self) -> HistogramResult<GrayscaleHistogram> {
        Ok(self.require_active()?.grayscale_histogram().clone())
    }

    fn fetch_channels(&self) -> HistogramResult<ChannelDistributionSet> {
        Ok(self.require_active()?.channel_histogram().clone())
    }
}
