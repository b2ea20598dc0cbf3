//! Core chart types.

use crate::axis::ScaleType;
use crate::style::SeriesStyle;

/// A unique identifier for an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AxisId(pub u32);

impl AxisId {
    /// Horizontal axis (intensity level).
    pub const X_PRIMARY: AxisId = AxisId(0);
    /// Primary value axis (left).
    pub const Y_PRIMARY: AxisId = AxisId(1);
    /// Secondary value axis (right), scaled independently of the primary one.
    pub const Y_SECONDARY: AxisId = AxisId(3);
}

/// Position of an axis on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisPosition {
    /// Left side (for Y axes)
    #[default]
    Left,
    /// Right side (for Y axes)
    Right,
    /// Bottom (for X axes)
    Bottom,
}

/// A data point in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DataPoint {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl DataPoint {
    /// Create a new data point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A data series in a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Series name (for legend)
    pub name: String,
    /// Data points
    pub data: Vec<DataPoint>,
    /// Visual style
    pub style: SeriesStyle,
    /// Which X axis this series uses
    pub x_axis: AxisId,
    /// Which Y axis this series uses
    pub y_axis: AxisId,
}

impl Series {
    /// Create an empty series.
    pub fn new(name: impl Into<String>, style: SeriesStyle) -> Self {
        Self {
            name: name.into(),
            data: Vec::new(),
            style,
            x_axis: AxisId::X_PRIMARY,
            y_axis: AxisId::Y_PRIMARY,
        }
    }

    /// Create a series from one y value per x index.
    pub fn from_values(name: impl Into<String>, values: &[f64], style: SeriesStyle) -> Self {
        let mut series = Self::new(name, style);
        series.set_values(values);
        series
    }

    /// Set which value axis this series is scaled against.
    pub fn with_y_axis(mut self, y_axis: AxisId) -> Self {
        self.y_axis = y_axis;
        self
    }

    /// Clear the series and refill it with `(index, value)` points.
    pub fn set_values(&mut self, values: &[f64]) {
        self.data.clear();
        self.data.extend(
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| DataPoint::new(i as f64, v)),
        );
    }

    /// Replace every point at once.
    ///
    /// The new point list is built before it is swapped in, so a reader never
    /// sees a partially updated series.
    pub fn replace_points<const N: usize>(&mut self, points: [DataPoint; N]) {
        self.data = Vec::from(points);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Axis configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// Unique identifier
    pub id: AxisId,
    /// Axis title
    pub label: Option<String>,
    /// Minimum value (None = auto)
    pub min: Option<f64>,
    /// Maximum value (None = auto)
    pub max: Option<f64>,
    /// Distance between major ticks (None = auto)
    pub interval: Option<f64>,
    /// Value-to-pixel mapping
    pub scale: ScaleType,
    /// Position on the chart
    pub position: AxisPosition,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            id: AxisId::default(),
            label: None,
            min: None,
            max: None,
            interval: None,
            scale: ScaleType::Linear,
            position: AxisPosition::Left,
        }
    }
}

impl Axis {
    /// Create the horizontal axis.
    pub fn x() -> Self {
        Self {
            id: AxisId::X_PRIMARY,
            position: AxisPosition::Bottom,
            ..Default::default()
        }
    }

    /// Create the primary value axis (left).
    pub fn y() -> Self {
        Self {
            id: AxisId::Y_PRIMARY,
            position: AxisPosition::Left,
            ..Default::default()
        }
    }

    /// Create the secondary value axis (right).
    pub fn y_secondary() -> Self {
        Self {
            id: AxisId::Y_SECONDARY,
            position: AxisPosition::Right,
            ..Default::default()
        }
    }

    /// Set the axis title.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Effective `(min, max)` after applying the scale's domain.
    ///
    /// Unset bounds default to `0.0` and `1.0`.
    pub fn effective_range(&self) -> (f64, f64) {
        let min = self.scale.clamp_value(self.min.unwrap_or(0.0));
        let max = self.scale.clamp_value(self.max.unwrap_or(1.0));
        (min, max)
    }

    /// Map a value on this axis into `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        let (min, max) = self.effective_range();
        self.scale.normalize(value, min, max)
    }
}
