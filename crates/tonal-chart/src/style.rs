//! Series styling types.

use crate::color::Color;

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartType {
    /// Connected line through every point
    #[default]
    Line,
    /// One bar per point, rising from the axis baseline
    Bar,
}

/// Visual style of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    /// Series color
    pub color: Color,
    /// Line or bar
    pub chart_type: ChartType,
    /// Line thickness in pixels (ignored for bars)
    pub line_width: f32,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: Color::GRAY,
            chart_type: ChartType::Bar,
            line_width: 1.0,
        }
    }
}

impl SeriesStyle {
    /// Bar style with the given color.
    pub fn bar(color: Color) -> Self {
        Self {
            color,
            chart_type: ChartType::Bar,
            ..Default::default()
        }
    }

    /// Line style with the given color.
    pub fn line(color: Color) -> Self {
        Self {
            color,
            chart_type: ChartType::Line,
            ..Default::default()
        }
    }

    /// Set the line width.
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }
}
