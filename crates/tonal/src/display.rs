//! Event-driven facade tying the components of one histogram display together.

use crate::config::DisplayConfig;
use crate::error::{HistogramError, HistogramResult};
use crate::series_store::{ChannelSeries, SeriesStore};
use crate::source::{ContextId, HistogramDataSource};
use crate::sync::{ControlSurface, InputSynchronizer};
use crate::threshold::{ThresholdChange, ThresholdController};
use crate::visibility::{ChannelVisibilityController, fetch_channels_for};
use tonal_chart::{ChartDirtyFlags, ChartFrame};
use tonal_core::profiling::profile_function;

/// One discrete user or host input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    /// Slider dragged to a position.
    SliderMoved(u8),
    /// Text field edited.
    TextEdited(String),
    /// Channel overlay checkbox toggled.
    ChannelsToggled(bool),
    /// Log scale checkbox toggled.
    LogScaleToggled(bool),
    /// The focused image changed; re-read the data source.
    ContextChanged,
}

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event changed display state.
    Handled,
    /// The event was the toolkit echoing a value the display had just pushed.
    SuppressedEcho,
    /// The event needs image data and no image is focused.
    NoActiveImage,
    /// Nothing to do (e.g. the context did not actually change).
    Unchanged,
    /// The source focuses another image than the displayed one; a
    /// [`DisplayEvent::ContextChanged`] has to be handled first.
    StaleContext,
}

/// A histogram display bound to one data source.
///
/// All methods run to completion on the caller's thread; one event is fully
/// applied before the next one is looked at.
pub struct HistogramDisplay<S: HistogramDataSource> {
    source: S,
    store: SeriesStore,
    threshold: ThresholdController,
    visibility: ChannelVisibilityController,
    sync: InputSynchronizer,
    context: Option<ContextId>,
}

impl<S: HistogramDataSource> HistogramDisplay<S> {
    /// Create a display and populate it from the source's current image.
    pub fn new(source: S) -> Self {
        Self::with_config(source, DisplayConfig::default())
    }

    /// Create a display with a custom configuration.
    pub fn with_config(source: S, config: DisplayConfig) -> Self {
        let threshold = ThresholdController::default();
        let mut display = Self {
            source,
            store: SeriesStore::new(config),
            threshold,
            visibility: ChannelVisibilityController::default(),
            sync: InputSynchronizer::new(threshold.value()),
            context: None,
        };

        if display.load_context().is_ok() {
            display.refresh_marker();
        }
        display
    }

    /// Attach the real widgets.
    pub fn attach_surface(&mut self, surface: Box<dyn ControlSurface>) {
        self.sync.attach(surface, self.visibility.is_shown());
    }

    /// Detach the widgets, returning them.
    pub fn detach_surface(&mut self) -> Option<Box<dyn ControlSurface>> {
        self.sync.detach()
    }

    /// Apply one event.
    pub fn handle(&mut self, event: DisplayEvent) -> EventOutcome {
        profile_function!();

        match event {
            DisplayEvent::SliderMoved(raw) => {
                if !self.sync.accept_slider(raw) {
                    return EventOutcome::SuppressedEcho;
                }
                let change = self.threshold.set_from_slider(raw);
                self.apply_threshold(change)
            }
            DisplayEvent::TextEdited(raw) => {
                if !self.sync.accept_text(&raw) {
                    return EventOutcome::SuppressedEcho;
                }
                let change = self.threshold.set_from_text(&raw);
                self.apply_threshold(change)
            }
            DisplayEvent::ChannelsToggled(enabled) => self.set_channels_visible(enabled),
            DisplayEvent::LogScaleToggled(enabled) => {
                if self.store.set_logarithmic(enabled) {
                    EventOutcome::Handled
                } else {
                    EventOutcome::Unchanged
                }
            }
            DisplayEvent::ContextChanged => self.switch_context(),
        }
    }

    fn apply_threshold(&mut self, change: ThresholdChange) -> EventOutcome {
        self.sync.publish(change.value);
        if self.context.is_none() {
            return EventOutcome::NoActiveImage;
        }
        self.store
            .update_threshold_marker(change.value, self.store.grayscale_max());
        EventOutcome::Handled
    }

    fn set_channels_visible(&mut self, enabled: bool) -> EventOutcome {
        if enabled && self.context.is_none() {
            self.sync.publish_channels_checked(false);
            return EventOutcome::NoActiveImage;
        }

        match self
            .visibility
            .set(enabled, self.context, &mut self.store, &self.source)
        {
            Ok(()) => EventOutcome::Handled,
            Err(err) => {
                tracing::warn!("Cannot show channel histograms: {}", err);
                self.sync.publish_channels_checked(false);
                match err {
                    HistogramError::StaleContext { .. } => EventOutcome::StaleContext,
                    _ => EventOutcome::NoActiveImage,
                }
            }
        }
    }

    /// Re-read the source after the focused image changed.
    ///
    /// Channel and marker series are dropped and stay absent until requested
    /// again; the grayscale series is repopulated right away.
    pub fn switch_context(&mut self) -> EventOutcome {
        let next = self.source.context();
        if next == self.context {
            return EventOutcome::Unchanged;
        }

        tracing::debug!(
            "Histogram context {:?} -> {:?}",
            self.context.map(|c| c.raw()),
            next.map(|c| c.raw())
        );
        self.store.clear_context();
        if self.visibility.is_shown() {
            self.visibility.reset();
            self.sync.publish_channels_checked(false);
        }

        match self.load_context() {
            Ok(()) => EventOutcome::Handled,
            Err(_) => {
                self.context = None;
                self.store.clear_grayscale_series();
                EventOutcome::NoActiveImage
            }
        }
    }

    fn load_context(&mut self) -> HistogramResult<()> {
        let Some(context) = self.source.context() else {
            self.context = None;
            return Err(HistogramError::NoActiveImage);
        };
        let grayscale = self.source.fetch_grayscale()?;
        self.store
            .set_grayscale_series(&grayscale.distribution, grayscale.max);
        self.context = Some(context);
        Ok(())
    }

    /// Create or move the marker to the current threshold.
    pub fn refresh_marker(&mut self) -> EventOutcome {
        if self.context.is_none() {
            return EventOutcome::NoActiveImage;
        }
        self.store
            .update_threshold_marker(self.threshold.value(), self.store.grayscale_max());
        EventOutcome::Handled
    }

    /// Build the channel series for the current context without showing them.
    pub fn ensure_channel_series(&mut self) -> HistogramResult<&ChannelSeries> {
        let context = self.context.ok_or(HistogramError::NoActiveImage)?;
        let source = &self.source;
        self.store
            .ensure_channel_series(context, || fetch_channels_for(source, context))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current threshold.
    pub fn threshold(&self) -> u8 {
        self.threshold.value()
    }

    /// The image context the series were populated from.
    pub fn context(&self) -> Option<ContextId> {
        self.context
    }

    pub fn channels_shown(&self) -> bool {
        self.visibility.is_shown()
    }

    pub fn is_logarithmic(&self) -> bool {
        self.store.axes().is_logarithmic()
    }

    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    pub fn synchronizer(&self) -> &InputSynchronizer {
        &self.sync
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the source, e.g. to focus another image before
    /// sending [`DisplayEvent::ContextChanged`].
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Everything a renderer should draw right now.
    pub fn frame(&self) -> ChartFrame<'_> {
        self.store.frame()
    }

    /// Return and reset what changed since the last frame.
    pub fn take_dirty(&mut self) -> ChartDirtyFlags {
        self.store.take_dirty()
    }
}
