//! Axis scale types.
//!
//! Determines how a value on an axis is mapped into the normalized `[0, 1]`
//! range a renderer works in.

/// Scale type for axis transformation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScaleType {
    /// Linear scale (default).
    #[default]
    Linear,

    /// Logarithmic scale.
    ///
    /// Values at or below `floor` are clamped to `floor` before the logarithm
    /// is taken, so empty histogram bins land on the axis baseline instead of
    /// producing `-inf`.
    Logarithmic {
        /// Log base (2 for histogram counts)
        base: f64,
        /// Smallest positive value the scale represents
        floor: f64,
    },
}

impl ScaleType {
    /// Create a base-2 logarithmic scale with the given floor.
    pub fn log2(floor: f64) -> Self {
        Self::Logarithmic { base: 2.0, floor }
    }

    /// Check if this is a logarithmic scale.
    pub fn is_logarithmic(&self) -> bool {
        matches!(self, Self::Logarithmic { .. })
    }

    /// Clamp a value into the domain of this scale.
    pub fn clamp_value(&self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Logarithmic { floor, .. } => value.max(*floor),
        }
    }

    /// Transform a data value to normalized coordinates [0, 1].
    ///
    /// Given a value in the range [min, max], returns a normalized value.
    pub fn normalize(&self, value: f64, min: f64, max: f64) -> f64 {
        if (max - min).abs() < f64::EPSILON {
            return 0.5;
        }

        match self {
            Self::Linear => (value - min) / (max - min),
            Self::Logarithmic { base, floor } => {
                let log_value = value.max(*floor).log(*base);
                let log_min = min.max(*floor).log(*base);
                let log_max = max.max(*floor).log(*base);
                if (log_max - log_min).abs() < f64::EPSILON {
                    return 0.5;
                }
                (log_value - log_min) / (log_max - log_min)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = ScaleType::Linear;

        assert!((scale.normalize(50.0, 0.0, 100.0) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_log2_scale() {
        let scale = ScaleType::log2(1.0);

        // 16 is halfway between 1 and 256 in base 2
        let normalized = scale.normalize(16.0, 1.0, 256.0);
        assert!((normalized - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_log_scale_floors_zero() {
        let scale = ScaleType::log2(1.0);

        let zero = scale.normalize(0.0, 0.0, 1024.0);
        assert!(zero.is_finite());
        assert_eq!(zero, 0.0);
        assert_eq!(scale.clamp_value(0.0), 1.0);
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(ScaleType::Linear.normalize(3.0, 3.0, 3.0), 0.5);
        assert_eq!(ScaleType::log2(1.0).normalize(0.0, 0.0, 1.0), 0.5);
    }
}
