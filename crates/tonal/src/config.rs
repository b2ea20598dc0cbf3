/// Configuration for a histogram display.
///
/// All fields have working defaults; override with the `with_*` setters.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// The horizontal axis gets `255 / tick_divisions` between ticks
    pub tick_divisions: u32,
    /// Logarithm base for the primary value axis in log mode
    pub log_base: f64,
    /// Smallest value shown on a log axis; zero bins are drawn at this height
    pub log_floor: f64,
    /// Thickness of the threshold marker line
    pub marker_width: f32,
    pub grayscale: SeriesAppearance,
    pub red: SeriesAppearance,
    pub green: SeriesAppearance,
    pub blue: SeriesAppearance,
    pub marker: SeriesAppearance,
    /// Title of the primary value axis
    pub primary_axis_title: String,
    /// Title of the secondary value axis
    pub secondary_axis_title: String,
}

/// Legend name and color of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesAppearance {
    pub name: String,
    pub color: tonal_chart::Color,
}

impl SeriesAppearance {
    pub fn new(name: impl Into<String>, color: tonal_chart::Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        use tonal_chart::Color;

        Self {
            tick_divisions: 8,
            log_base: 2.0,
            log_floor: 1.0,
            marker_width: 2.0,
            grayscale: SeriesAppearance::new("Gray Histogram", Color::GRAY),
            red: SeriesAppearance::new("Red Histogram", Color::RED),
            green: SeriesAppearance::new("Green Histogram", Color::GREEN),
            blue: SeriesAppearance::new("Blue Histogram", Color::BLUE),
            marker: SeriesAppearance::new("Threshold", Color::DARK_ORANGE),
            primary_axis_title: "Gray Histogram".to_string(),
            secondary_axis_title: "RGB Histogram".to_string(),
        }
    }
}

impl DisplayConfig {
    pub fn with_tick_divisions(mut self, divisions: u32) -> Self {
        self.tick_divisions = divisions.max(1);
        self
    }

    pub fn with_log_base(mut self, base: f64) -> Self {
        self.log_base = base;
        self
    }

    /// Use a smaller floor for density histograms, whose bins are below 1.
    pub fn with_log_floor(mut self, floor: f64) -> Self {
        self.log_floor = floor;
        self
    }

    pub fn with_marker_width(mut self, width: f32) -> Self {
        self.marker_width = width;
        self
    }

    /// Distance between horizontal ticks.
    pub fn tick_interval(&self) -> f64 {
        f64::from(crate::MAX_LEVEL) / f64::from(self.tick_divisions.max(1))
    }
}
