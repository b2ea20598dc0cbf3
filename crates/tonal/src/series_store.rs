//! Renderable series and their lifecycle.
//!
//! The store holds at most one instance of each series:
//! - grayscale: lives as long as the store, rebuilt in place per image
//! - red/green/blue: built lazily once per image context, then only shown or hidden
//! - threshold marker: created on first threshold update, always exactly two points

use crate::axis_scale::AxisScaleManager;
use crate::config::{DisplayConfig, SeriesAppearance};
use crate::distribution::{Channel, ChannelDistributionSet, IntensityDistribution};
use crate::source::ContextId;
use tonal_chart::{AxisId, ChartDirtyFlags, ChartFrame, DataPoint, Series, SeriesStyle};
use tonal_core::profiling::profile_function;

/// The three channel series built for one image context.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSeries {
    context: ContextId,
    red: Series,
    green: Series,
    blue: Series,
}

impl ChannelSeries {
    fn build(context: ContextId, set: &ChannelDistributionSet, config: &DisplayConfig) -> Self {
        let line = |appearance: &SeriesAppearance, dist: &IntensityDistribution| {
            Series::from_values(
                appearance.name.clone(),
                dist.as_slice(),
                SeriesStyle::line(appearance.color),
            )
            .with_y_axis(AxisId::Y_SECONDARY)
        };

        Self {
            context,
            red: line(&config.red, &set.red),
            green: line(&config.green, &set.green),
            blue: line(&config.blue, &set.blue),
        }
    }

    /// The image context these series were built for.
    pub fn context(&self) -> ContextId {
        self.context
    }

    /// Series for one channel.
    pub fn get(&self, channel: Channel) -> &Series {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Red, green, blue in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        [&self.red, &self.green, &self.blue].into_iter()
    }
}

/// Owner of every renderable series of one histogram display.
#[derive(Debug, Clone)]
pub struct SeriesStore {
    config: DisplayConfig,
    grayscale: Series,
    grayscale_max: f64,
    channels: Option<ChannelSeries>,
    channels_shown: bool,
    marker: Option<Series>,
    axes: AxisScaleManager,
    dirty: ChartDirtyFlags,
}

impl SeriesStore {
    pub fn new(config: DisplayConfig) -> Self {
        let grayscale = Series::new(
            config.grayscale.name.clone(),
            SeriesStyle::bar(config.grayscale.color),
        );
        let axes = AxisScaleManager::new(&config);

        Self {
            config,
            grayscale,
            grayscale_max: 0.0,
            channels: None,
            channels_shown: false,
            marker: None,
            axes,
            dirty: ChartDirtyFlags::all(),
        }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    // =========================================================================
    // Grayscale
    // =========================================================================

    /// Replace the grayscale series wholesale and scale the primary axis to `max`.
    pub fn set_grayscale_series(&mut self, distribution: &IntensityDistribution, max: f64) {
        profile_function!();

        self.grayscale.set_values(distribution.as_slice());
        self.grayscale_max = max;
        self.dirty.insert(ChartDirtyFlags::GRAYSCALE);
        if self.axes.set_primary_data(max, distribution.min_positive()) {
            self.dirty.insert(ChartDirtyFlags::AXES);
        }
    }

    /// Empty the grayscale series while keeping it in the render set.
    pub fn clear_grayscale_series(&mut self) {
        if !self.grayscale.is_empty() {
            self.grayscale.data.clear();
            self.dirty.insert(ChartDirtyFlags::GRAYSCALE);
        }
        self.grayscale_max = 0.0;
        if self.axes.clear_primary() {
            self.dirty.insert(ChartDirtyFlags::AXES);
        }
    }

    pub fn grayscale(&self) -> &Series {
        &self.grayscale
    }

    /// The maximum the grayscale series was last populated with.
    pub fn grayscale_max(&self) -> f64 {
        self.grayscale_max
    }

    // =========================================================================
    // Channels
    // =========================================================================

    /// Check if channel series exist for `context`.
    pub fn has_channel_series(&self, context: ContextId) -> bool {
        self.channels
            .as_ref()
            .is_some_and(|c| c.context == context)
    }

    /// Build the channel series for `context` unless they already exist.
    ///
    /// `fetch` runs only when a build is needed, so repeated calls within one
    /// context walk the distributions once. Series left over from a different
    /// context are discarded first.
    pub fn ensure_channel_series<E>(
        &mut self,
        context: ContextId,
        fetch: impl FnOnce() -> Result<ChannelDistributionSet, E>,
    ) -> Result<&ChannelSeries, E> {
        let channels = match self.channels.take() {
            Some(existing) if existing.context == context => existing,
            stale => {
                if let Some(stale) = stale {
                    tracing::debug!(
                        "Dropping channel series of context {} for {}",
                        stale.context.raw(),
                        context.raw()
                    );
                    self.dirty.insert(ChartDirtyFlags::CHANNELS);
                    if self.channels_shown {
                        self.channels_shown = false;
                        self.dirty.insert(ChartDirtyFlags::CHANNEL_VISIBILITY);
                    }
                }
                let set = fetch()?;

                profile_function!();
                tracing::debug!("Building channel series for context {}", context.raw());
                self.dirty.insert(ChartDirtyFlags::CHANNELS);
                if self.axes.set_secondary_max(set.max) {
                    self.dirty.insert(ChartDirtyFlags::AXES);
                }
                ChannelSeries::build(context, &set, &self.config)
            }
        };

        Ok(&*self.channels.insert(channels))
    }

    /// Attach the channel series to the render set.
    ///
    /// Returns `false` if there are no channel series to show.
    pub fn show_channel_series(&mut self) -> bool {
        if self.channels.is_none() {
            return false;
        }
        if !self.channels_shown {
            self.channels_shown = true;
            self.dirty.insert(ChartDirtyFlags::CHANNEL_VISIBILITY);
        }
        true
    }

    /// Detach the channel series from the render set, keeping their data.
    pub fn hide_channel_series(&mut self) {
        if self.channels_shown {
            self.channels_shown = false;
            self.dirty.insert(ChartDirtyFlags::CHANNEL_VISIBILITY);
        }
    }

    pub fn channels_shown(&self) -> bool {
        self.channels_shown && self.channels.is_some()
    }

    /// Channel series, whether shown or hidden.
    pub fn channel_series(&self) -> Option<&ChannelSeries> {
        self.channels.as_ref()
    }

    // =========================================================================
    // Threshold marker
    // =========================================================================

    /// Move the marker to `value`, spanning `0..=y_max`.
    ///
    /// The first call creates the marker and pins the horizontal axis to
    /// `[0, 255]`. Later calls replace both points in one assignment.
    pub fn update_threshold_marker(&mut self, value: u8, y_max: f64) {
        let x = f64::from(value);
        let points = [DataPoint::new(x, 0.0), DataPoint::new(x, y_max)];

        match &mut self.marker {
            Some(marker) => {
                if marker.data[..] == points[..] {
                    return;
                }
                marker.replace_points(points);
            }
            None => {
                let appearance = &self.config.marker;
                let mut marker = Series::new(
                    appearance.name.clone(),
                    SeriesStyle::line(appearance.color).with_line_width(self.config.marker_width),
                );
                marker.replace_points(points);
                self.marker = Some(marker);

                if self.axes.fix_intensity_range(self.config.tick_interval()) {
                    self.dirty.insert(ChartDirtyFlags::AXES);
                }
            }
        }

        tracing::trace!("Threshold marker at {} (height {})", value, y_max);
        self.dirty.insert(ChartDirtyFlags::MARKER);
    }

    pub fn marker(&self) -> Option<&Series> {
        self.marker.as_ref()
    }

    // =========================================================================
    // Context & axes
    // =========================================================================

    /// Drop channel and marker series so the next context rebuilds them.
    pub fn clear_context(&mut self) {
        if self.channels.take().is_some() {
            self.dirty.insert(ChartDirtyFlags::CHANNELS);
        }
        if self.channels_shown {
            self.channels_shown = false;
            self.dirty.insert(ChartDirtyFlags::CHANNEL_VISIBILITY);
        }
        if self.marker.take().is_some() {
            self.dirty.insert(ChartDirtyFlags::MARKER);
        }
        if self.axes.clear_secondary() {
            self.dirty.insert(ChartDirtyFlags::AXES);
        }
    }

    pub fn axes(&self) -> &AxisScaleManager {
        &self.axes
    }

    /// Switch the primary value axis to log scale or back.
    pub fn set_logarithmic(&mut self, enabled: bool) -> bool {
        let changed = self.axes.set_logarithmic(enabled);
        if changed {
            self.dirty.insert(ChartDirtyFlags::AXES);
        }
        changed
    }

    // =========================================================================
    // Render surface
    // =========================================================================

    /// Everything visible right now: grayscale, shown channels, then the marker.
    pub fn frame(&self) -> ChartFrame<'_> {
        let mut series = Vec::with_capacity(5);
        series.push(&self.grayscale);
        if self.channels_shown
            && let Some(channels) = &self.channels
        {
            series.extend(channels.iter());
        }
        if let Some(marker) = &self.marker {
            series.push(marker);
        }

        ChartFrame {
            series,
            axes: self.axes.axes(),
        }
    }

    /// What changed since the last call.
    pub fn dirty(&self) -> ChartDirtyFlags {
        self.dirty
    }

    /// Return and reset the dirty flags after a frame has been drawn.
    pub fn take_dirty(&mut self) -> ChartDirtyFlags {
        std::mem::take(&mut self.dirty)
    }
}

impl Default for SeriesStore {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}
