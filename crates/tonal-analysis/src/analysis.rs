//! Per-image histogram computation.

use crate::error::{AnalysisError, AnalysisResult};
use image::{DynamicImage, GrayImage, ImageReader, Luma};
use std::cell::OnceCell;
use std::path::Path;
use tonal::{BINS, ChannelDistributionSet, GrayscaleHistogram, IntensityDistribution};
use tonal_core::profiling::profile_function;

/// One decoded image and the histograms derived from it.
///
/// Every derived value is computed on first use and cached for the lifetime
/// of the analysis.
#[derive(Debug)]
pub struct ImageAnalysis {
    image: DynamicImage,
    gray: OnceCell<GrayImage>,
    grayscale: OnceCell<GrayscaleHistogram>,
    channels: OnceCell<ChannelDistributionSet>,
}

impl ImageAnalysis {
    pub fn new(image: DynamicImage) -> Self {
        Self {
            image,
            gray: OnceCell::new(),
            grayscale: OnceCell::new(),
            channels: OnceCell::new(),
        }
    }

    /// Decode an image file.
    pub fn open(path: impl AsRef<Path>) -> AnalysisResult<Self> {
        let path = path.as_ref();
        let reader = ImageReader::open(path).map_err(|source| AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = reader
            .with_guessed_format()
            .map_err(|source| AnalysisError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let image = reader.decode().map_err(|source| AnalysisError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            "Loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self::new(image))
    }

    /// The source image.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Luma conversion of the source image.
    pub fn grayscale_image(&self) -> &GrayImage {
        self.gray.get_or_init(|| {
            profile_function!();
            self.image.to_luma8()
        })
    }

    /// Distribution of gray levels, scaled to its own peak.
    pub fn grayscale_histogram(&self) -> &GrayscaleHistogram {
        self.grayscale.get_or_init(|| {
            profile_function!();

            let mut counts = [0u32; BINS];
            for Luma([level]) in self.grayscale_image().pixels() {
                counts[*level as usize] += 1;
            }
            GrayscaleHistogram::from_distribution(IntensityDistribution::from_counts(&counts))
        })
    }

    /// Red, green and blue distributions sharing their common peak.
    pub fn channel_histogram(&self) -> &ChannelDistributionSet {
        self.channels.get_or_init(|| {
            profile_function!();

            let mut red = [0u32; BINS];
            let mut green = [0u32; BINS];
            let mut blue = [0u32; BINS];
            for pixel in self.image.to_rgb8().pixels() {
                let [r, g, b] = pixel.0;
                red[r as usize] += 1;
                green[g as usize] += 1;
                blue[b as usize] += 1;
            }
            ChannelDistributionSet::from_distributions(
                IntensityDistribution::from_counts(&red),
                IntensityDistribution::from_counts(&green),
                IntensityDistribution::from_counts(&blue),
            )
        })
    }

    /// Binary image: white where the gray level is at least `threshold`.
    pub fn threshold_image(&self, threshold: u8) -> GrayImage {
        profile_function!();

        let gray = self.grayscale_image();
        GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
            let Luma([level]) = *gray.get_pixel(x, y);
            if level >= threshold {
                Luma([u8::MAX])
            } else {
                Luma([0])
            }
        })
    }
}

impl From<DynamicImage> for ImageAnalysis {
    fn from(image: DynamicImage) -> Self {
        Self::new(image)
    }
}
