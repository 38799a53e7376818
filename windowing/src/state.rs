use alloc::vec::Vec;

use crate::ItemMetadata;

/// Transferable engine state for session resume.
///
/// Hosts treat this as opaque: capture it with [`crate::WindowingEngine::saved_state`], persist
/// it, and hand it back verbatim to [`crate::WindowingEngine::restore`]. Carrying the measured
/// metadata means a restored `scroll_offset` lands on the exact item it pointed at, instead of a
/// position recomputed from estimates.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedState {
    /// Metadata for indexes `0..metadata.len()`.
    pub metadata: Vec<ItemMetadata>,
    pub scroll_offset: f64,
}

impl SavedState {
    /// Mirrors the engine's watermark: `None` when nothing had been measured.
    pub fn last_measured_index(&self) -> Option<usize> {
        self.metadata.len().checked_sub(1)
    }
}
