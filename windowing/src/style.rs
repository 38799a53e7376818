#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::ItemStyle;

#[cfg(feature = "std")]
type StyleMap = HashMap<usize, ItemStyle>;
#[cfg(not(feature = "std"))]
type StyleMap = BTreeMap<usize, ItemStyle>;

/// Per-index memo of computed item styles.
///
/// Hosts that skip re-rendering items whose style value is unchanged rely on this cache handing
/// out identical styles across frames. It is cleared when the size source changes and when
/// scrolling settles.
#[derive(Clone, Debug, Default)]
pub struct StyleCache {
    styles: StyleMap,
    clears: u64,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<ItemStyle> {
        self.styles.get(&index).copied()
    }

    pub fn get_or_insert_with(&mut self, index: usize, f: impl FnOnce() -> ItemStyle) -> ItemStyle {
        *self.styles.entry(index).or_insert_with(f)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Number of wholesale invalidations so far.
    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    pub fn clear(&mut self) {
        self.styles.clear();
        self.clears = self.clears.wrapping_add(1);
    }

    /// Drops styles for `index` and everything after it.
    pub fn clear_from(&mut self, index: usize) {
        self.styles.retain(|&i, _| i < index);
    }
}
