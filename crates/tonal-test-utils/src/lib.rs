//! Test utilities for Tonal.
//!
//! - [`StubHistogramSource`] - in-memory data source that counts fetches
//! - [`RecordingSurface`] - control surface that records every write-back
//!
//! # Example
//!
//! ```rust
//! use tonal::{DisplayEvent, HistogramDisplay};
//! use tonal_test_utils::{StubHistogramSource, StubImage};
//!
//! let source = StubHistogramSource::with_image(StubImage::peak(100, 1000.0));
//! let mut display = HistogramDisplay::new(source);
//!
//! display.handle(DisplayEvent::ChannelsToggled(true));
//! display.handle(DisplayEvent::ChannelsToggled(false));
//! display.handle(DisplayEvent::ChannelsToggled(true));
//!
//! assert_eq!(display.source().count_channel_fetches(), 1);
//! ```
//!
//! Recorders use `parking_lot::Mutex` so `&self` trait methods can log calls.

pub mod source;
pub mod surface;

pub use source::*;
pub use surface::*;
