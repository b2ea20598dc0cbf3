//! Change tracking between rendered frames.

bitflags::bitflags! {
    /// Dirty flags for tracking which parts of a chart a renderer must refresh.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ChartDirtyFlags: u16 {
        /// Grayscale series points were rebuilt.
        const GRAYSCALE = 0b0000_0001;
        /// Channel series were built or dropped.
        const CHANNELS = 0b0000_0010;
        /// Channel series were attached to or detached from the render set.
        const CHANNEL_VISIBILITY = 0b0000_0100;
        /// Threshold marker was created, moved or dropped.
        const MARKER = 0b0000_1000;
        /// Axis range, interval or scale changed.
        const AXES = 0b0001_0000;
    }
}

impl ChartDirtyFlags {
    /// Check if any series geometry has to be re-uploaded.
    pub fn needs_geometry(&self) -> bool {
        self.intersects(Self::GRAYSCALE | Self::CHANNELS | Self::MARKER | Self::AXES)
    }

    /// Check if only the threshold marker moved.
    pub fn is_marker_only(&self) -> bool {
        *self == Self::MARKER
    }
}
