//! Histogram computation for decoded images.
//!
//! [`ImageAnalysis`] turns one image into grayscale and per-channel intensity
//! distributions. [`AnalysisSource`] tracks which analysis is focused and
//! serves it to a [`tonal::HistogramDisplay`].
//!
//! ```no_run
//! use tonal::{DisplayEvent, HistogramDisplay};
//! use tonal_analysis::AnalysisSource;
//!
//! let mut source = AnalysisSource::new();
//! source.open("scan.png")?;
//!
//! let mut display = HistogramDisplay::new(source);
//! display.handle(DisplayEvent::SliderMoved(128));
//!
//! let binary = display.source().active().map(|a| a.threshold_image(128));
//! # Ok::<(), tonal_analysis::AnalysisError>(())
//! ```

mod analysis;
mod error;
mod source;

pub use analysis::*;
pub use error::*;
pub use source::*;
