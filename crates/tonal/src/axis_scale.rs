//! Value-axis bounds and scale mode.

use crate::config::DisplayConfig;
use crate::distribution::MAX_LEVEL;
use tonal_chart::{Axis, AxisId, ScaleType};

/// Owns the three chart axes and derives their bounds from histogram maxima.
///
/// Maxima only change when distribution data changes. Threshold movement
/// never touches the axes.
///
/// The log floor starts at the configured value. Data whose smallest non-zero
/// bin lies below it (densities rather than counts) lowers the floor to one
/// step of the log base under that bin, and the floor always stays below the
/// axis maximum.
#[derive(Debug, Clone)]
pub struct AxisScaleManager {
    axes: Vec<Axis>,
    log_base: f64,
    log_floor: f64,
    smallest_positive: Option<f64>,
}

impl AxisScaleManager {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            axes: vec![
                Axis::x(),
                Axis::y().with_label(config.primary_axis_title.clone()),
                Axis::y_secondary().with_label(config.secondary_axis_title.clone()),
            ],
            log_base: config.log_base,
            log_floor: config.log_floor,
            smallest_positive: None,
        }
    }

    /// All axes, horizontal first.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Get an axis by ID.
    pub fn axis(&self, id: AxisId) -> Option<&Axis> {
        self.axes.iter().find(|a| a.id == id)
    }

    fn axis_mut(&mut self, id: AxisId) -> Option<&mut Axis> {
        self.axes.iter_mut().find(|a| a.id == id)
    }

    /// Scale the primary value axis to `[0, max]` and fit the log floor to
    /// the smallest non-zero value of the data.
    ///
    /// Returns `true` if the bounds or the scale changed.
    pub fn set_primary_data(&mut self, max: f64, smallest_positive: Option<f64>) -> bool {
        let range_changed = self.set_value_range(AxisId::Y_PRIMARY, Some(max));
        self.smallest_positive = smallest_positive;
        self.refit_log_floor() || range_changed
    }

    /// Scale the secondary value axis to `[0, max]`.
    ///
    /// Returns `true` if the bounds changed.
    pub fn set_secondary_max(&mut self, max: f64) -> bool {
        self.set_value_range(AxisId::Y_SECONDARY, Some(max))
    }

    /// Forget the primary bounds (no image focused).
    pub fn clear_primary(&mut self) -> bool {
        let range_changed = self.set_value_range(AxisId::Y_PRIMARY, None);
        self.smallest_positive = None;
        self.refit_log_floor() || range_changed
    }

    /// Forget the secondary bounds (channel series dropped).
    pub fn clear_secondary(&mut self) -> bool {
        self.set_value_range(AxisId::Y_SECONDARY, None)
    }

    fn set_value_range(&mut self, id: AxisId, max: Option<f64>) -> bool {
        let Some(axis) = self.axis_mut(id) else {
            return false;
        };
        let min = max.map(|_| 0.0);
        if axis.min == min && axis.max == max {
            return false;
        }
        axis.min = min;
        axis.max = max;
        true
    }

    /// Pin the horizontal axis to the full intensity range.
    ///
    /// Returns `true` if the range or interval changed.
    pub fn fix_intensity_range(&mut self, interval: f64) -> bool {
        let Some(axis) = self.axis_mut(AxisId::X_PRIMARY) else {
            return false;
        };
        let max = f64::from(MAX_LEVEL);
        if axis.min == Some(0.0) && axis.max == Some(max) && axis.interval == Some(interval) {
            return false;
        }
        axis.min = Some(0.0);
        axis.max = Some(max);
        axis.interval = Some(interval);
        true
    }

    /// Switch the primary value axis between linear and logarithmic.
    ///
    /// Returns `true` if the mode changed. Series data is left untouched.
    pub fn set_logarithmic(&mut self, enabled: bool) -> bool {
        let scale = if enabled {
            ScaleType::Logarithmic {
                base: self.log_base,
                floor: self.effective_log_floor(),
            }
        } else {
            ScaleType::Linear
        };
        let Some(axis) = self.axis_mut(AxisId::Y_PRIMARY) else {
            return false;
        };
        if axis.scale == scale {
            return false;
        }
        axis.scale = scale;
        true
    }

    /// Floor the log scale uses for the current data.
    pub fn effective_log_floor(&self) -> f64 {
        let mut floor = self.log_floor;
        if let Some(smallest) = self.smallest_positive
            && smallest < floor
        {
            floor = smallest / self.log_base;
        }
        if let Some(max) = self.primary_max()
            && max > 0.0
            && floor >= max
        {
            floor = max / self.log_base;
        }
        floor
    }

    fn refit_log_floor(&mut self) -> bool {
        self.is_logarithmic() && self.set_logarithmic(true)
    }

    /// Check if the primary value axis is logarithmic.
    pub fn is_logarithmic(&self) -> bool {
        self.axis(AxisId::Y_PRIMARY)
            .is_some_and(|a| a.scale.is_logarithmic())
    }

    /// Current primary value-axis maximum.
    pub fn primary_max(&self) -> Option<f64> {
        self.axis(AxisId::Y_PRIMARY).and_then(|a| a.max)
    }

    /// Current secondary value-axis maximum.
    pub fn secondary_max(&self) -> Option<f64> {
        self.axis(AxisId::Y_SECONDARY).and_then(|a| a.max)
    }
}
