//! Snapshot of what a render backend should draw.

use crate::types::{Axis, AxisId, Series};

/// Ordered list of visible series plus the axis settings they are drawn
/// against. Borrowed from the owning store for the duration of one frame.
#[derive(Debug, Clone)]
pub struct ChartFrame<'a> {
    /// Visible series, back to front
    pub series: Vec<&'a Series>,
    /// All axes
    pub axes: &'a [Axis],
}

impl<'a> ChartFrame<'a> {
    /// Get an axis by ID.
    pub fn axis(&self, id: AxisId) -> Option<&'a Axis> {
        self.axes.iter().find(|a| a.id == id)
    }

    /// Look up a visible series by name.
    pub fn series_named(&self, name: &str) -> Option<&'a Series> {
        self.series.iter().copied().find(|s| s.name == name)
    }

    /// Names of the visible series in draw order.
    pub fn series_names(&self) -> Vec<&'a str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }
}
