//! Tonal Chart - renderable chart model
//!
//! This crate describes what a histogram chart looks like without drawing it:
//! - Named, colored series of `(x, y)` points bound to a value axis
//! - Axes with ranges, tick intervals and linear or logarithmic scales
//! - Dirty flags so a renderer can refresh only what changed
//!
//! A render backend consumes a [`ChartFrame`] and turns it into pixels.

mod axis;
mod color;
mod dirty;
mod frame;
mod style;
mod types;

pub use axis::*;
pub use color::*;
pub use dirty::*;
pub use frame::*;
pub use style::*;
pub use types::*;
