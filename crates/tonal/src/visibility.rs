//! RGB channel overlay toggle.

use crate::distribution::ChannelDistributionSet;
use crate::error::{HistogramError, HistogramResult};
use crate::series_store::SeriesStore;
use crate::source::{ContextId, HistogramDataSource};

/// Fetch channel distributions, provided the source still focuses `context`.
pub fn fetch_channels_for<S: HistogramDataSource + ?Sized>(
    source: &S,
    context: ContextId,
) -> HistogramResult<ChannelDistributionSet> {
    let focused = source.context();
    if focused != Some(context) {
        return Err(HistogramError::StaleContext {
            loaded: context,
            focused,
        });
    }
    source.fetch_channels()
}

/// Whether the channel overlay is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelVisibility {
    #[default]
    Hidden,
    Shown,
}

/// Two-state machine driven by the channel checkbox.
///
/// Hiding keeps the built series in the store, so showing them again within
/// the same image context costs no fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelVisibilityController {
    state: ChannelVisibility,
}

impl ChannelVisibilityController {
    pub fn state(&self) -> ChannelVisibility {
        self.state
    }

    pub fn is_shown(&self) -> bool {
        self.state == ChannelVisibility::Shown
    }

    /// Show the channel series of `context`, fetching them only if the store
    /// has none for it yet.
    ///
    /// Fails with [`HistogramError::StaleContext`] if the source has moved on
    /// to another image, leaving the store untouched.
    pub fn enable<S: HistogramDataSource + ?Sized>(
        &mut self,
        context: ContextId,
        store: &mut SeriesStore,
        source: &S,
    ) -> HistogramResult<()> {
        store.ensure_channel_series(context, || fetch_channels_for(source, context))?;
        store.show_channel_series();
        self.state = ChannelVisibility::Shown;
        Ok(())
    }

    /// Hide the channel series without discarding them.
    pub fn disable(&mut self, store: &mut SeriesStore) {
        store.hide_channel_series();
        self.state = ChannelVisibility::Hidden;
    }

    /// Apply a checkbox state for the loaded `context`.
    pub fn set<S: HistogramDataSource + ?Sized>(
        &mut self,
        enabled: bool,
        context: Option<ContextId>,
        store: &mut SeriesStore,
        source: &S,
    ) -> HistogramResult<()> {
        if enabled {
            let context = context.ok_or(HistogramError::NoActiveImage)?;
            self.enable(context, store, source)
        } else {
            self.disable(store);
            Ok(())
        }
    }

    /// Back to hidden after the image context changed.
    pub fn reset(&mut self) {
        self.state = ChannelVisibility::Hidden;
    }
}
