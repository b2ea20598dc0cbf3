//! Tonal - histogram threshold display state
//!
//! This crate drives a histogram chart with a movable threshold marker:
//! - Grayscale and optional red/green/blue distributions as renderable series
//! - A two-point vertical marker at the current threshold
//! - One threshold value kept in sync across a slider and a text field
//! - Lazy channel series that survive being hidden
//!
//! Histogram computation and pixel rendering live elsewhere: data comes in
//! through [`HistogramDataSource`] and leaves as a [`tonal_chart::ChartFrame`].
//!
//! # Example
//!
//! ```ignore
//! use tonal::{DisplayEvent, HistogramDisplay};
//!
//! let mut display = HistogramDisplay::new(source);
//! display.attach_surface(Box::new(widgets));
//!
//! display.handle(DisplayEvent::SliderMoved(128));
//! display.handle(DisplayEvent::ChannelsToggled(true));
//!
//! let dirty = display.take_dirty();
//! renderer.draw(&display.frame(), dirty);
//! ```

mod axis_scale;
mod config;
mod display;
mod distribution;
mod error;
mod series_store;
mod source;
mod sync;
mod threshold;
mod visibility;

pub use axis_scale::*;
pub use config::*;
pub use display::*;
pub use distribution::*;
pub use error::*;
pub use series_store::*;
pub use source::*;
pub use sync::*;
pub use threshold::*;
pub use visibility::*;

pub use tonal_chart as chart;
