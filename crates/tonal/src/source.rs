//! Boundary to the image-analysis collaborator.

use crate::distribution::{ChannelDistributionSet, GrayscaleHistogram};
use crate::error::HistogramResult;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of one focused image.
///
/// A new ID is minted whenever the focused image changes, even if the same
/// file is focused again, so memoized series never outlive their image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextId(u64);

static NEXT_CONTEXT: AtomicU64 = AtomicU64::new(1);

impl ContextId {
    /// Mint a process-unique context ID.
    pub fn next() -> Self {
        Self(NEXT_CONTEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Read access to the histograms of the currently focused image.
///
/// Both fetches are pure reads. They fail with
/// [`HistogramError::NoActiveImage`](crate::HistogramError::NoActiveImage)
/// when [`context`](Self::context) is `None`.
pub trait HistogramDataSource {
    /// The focused image, if any.
    fn context(&self) -> Option<ContextId>;

    /// Grayscale distribution and its maximum.
    fn fetch_grayscale(&self) -> HistogramResult<GrayscaleHistogram>;

    /// Red, green and blue distributions and their shared maximum.
    fn fetch_channels(&self) -> HistogramResult<ChannelDistributionSet>;
}

impl<T: HistogramDataSource + ?Sized> HistogramDataSource for &T {
    fn context(&self) -> Option<ContextId> {
        (**self).context()
    }

    fn fetch_grayscale(&self) -> HistogramResult<GrayscaleHistogram> {
        (**self).fetch_grayscale()
    }

    fn fetch_channels(&self) -> HistogramResult<ChannelDistributionSet> {
        (**self).fetch_channels()
    }
}

impl<T: HistogramDataSource + ?Sized> HistogramDataSource for Box<T> {
    fn context(&self) -> Option<ContextId> {
        (**self).context()
    }

    fn fetch_grayscale(&self) -> HistogramResult<GrayscaleHistogram> {
        (**self).fetch_grayscale()
    }

    fn fetch_channels(&self) -> HistogramResult<ChannelDistributionSet> {
        (**self).fetch_channels()
    }
}
