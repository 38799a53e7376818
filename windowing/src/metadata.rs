//! Lazily extended per-item metadata and total-size estimation.

use alloc::vec::Vec;

use crate::ItemMetadata;
use crate::error::is_valid_extent;

/// Cache of exact item offsets for the contiguous prefix `0..=last_measured_index`.
///
/// The prefix only grows through [`MetadataStore::ensure`] and only shrinks through
/// [`MetadataStore::reset_after_index`] / [`MetadataStore::truncate_to_count`]. Each index is
/// computed at most once between resets.
#[derive(Clone, Debug, Default)]
pub struct MetadataStore {
    entries: Vec<ItemMetadata>,
    revision: u64,
}

/// Relative slack allowed between a saved offset and the one rebuilt from the saved sizes.
const SAVED_OFFSET_TOLERANCE: f64 = 1e-9;

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from previously exported entries.
    ///
    /// Sizes are authoritative: offsets are recomputed from them, and a saved offset only has to
    /// agree within a small relative tolerance (text formats may lose the last bits). Returns the
    /// first index with an invalid size or an offset that does not follow from its predecessors.
    pub(crate) fn from_entries(mut entries: Vec<ItemMetadata>) -> Result<Self, usize> {
        let mut offset = 0.0;
        for (i, m) in entries.iter_mut().enumerate() {
            if !is_valid_extent(m.size) || !offsets_agree(m.offset, offset) {
                return Err(i);
            }
            m.offset = offset;
            offset += m.size;
        }
        Ok(Self {
            entries,
            revision: 0,
        })
    }

    /// Bumped whenever the measured prefix grows or shrinks.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The highest index with exact metadata, or `None` when nothing is measured yet.
    pub fn last_measured_index(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns cached metadata without extending the store.
    pub fn get(&self, index: usize) -> Option<ItemMetadata> {
        self.entries.get(index).copied()
    }

    pub fn entries(&self) -> &[ItemMetadata] {
        &self.entries
    }

    /// End of the last measured item (0 when empty).
    pub fn measured_extent(&self) -> f64 {
        self.entries.last().map_or(0.0, ItemMetadata::end)
    }

    /// Returns the metadata for `target`, measuring every unknown index up to it first.
    pub fn ensure(&mut self, target: usize, mut size_fn: impl FnMut(usize) -> f64) -> ItemMetadata {
        if let Some(m) = self.entries.get(target) {
            return *m;
        }

        let from = self.entries.len();
        let mut offset = self.measured_extent();
        self.entries.reserve(target + 1 - from);
        for index in from..=target {
            let size = checked_size(index, size_fn(index));
            self.entries.push(ItemMetadata { offset, size });
            offset += size;
        }
        self.revision = self.revision.wrapping_add(1);
        wtrace!(from, to = target, "MetadataStore::ensure extended");
        self.entries[target]
    }

    /// Forgets every entry at or after `index`.
    pub fn reset_after_index(&mut self, index: usize) {
        if index < self.entries.len() {
            wdebug!(
                index,
                dropped = self.entries.len() - index,
                "MetadataStore::reset_after_index"
            );
            self.entries.truncate(index);
            self.revision = self.revision.wrapping_add(1);
        }
    }

    /// Drops entries that fall outside a shrunken collection.
    pub fn truncate_to_count(&mut self, item_count: usize) {
        if item_count < self.entries.len() {
            self.entries.truncate(item_count);
            self.revision = self.revision.wrapping_add(1);
        }
    }

    /// Greatest measured index whose offset is `<= target`, searched within `0..=bound`.
    ///
    /// `bound` must be a measured index.
    pub(crate) fn search(&self, bound: usize, target: f64) -> usize {
        let known = &self.entries[..=bound];
        // First index whose offset exceeds the target; the answer is the one before it.
        let past = known.partition_point(|m| m.offset <= target);
        past.saturating_sub(1)
    }
}

fn offsets_agree(saved: f64, rebuilt: f64) -> bool {
    let tolerance = SAVED_OFFSET_TOLERANCE * rebuilt.max(1.0);
    let diff = saved - rebuilt;
    // NaN fails both comparisons.
    diff <= tolerance && diff >= -tolerance
}

impl PartialEq for MetadataStore {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

fn checked_size(index: usize, size: f64) -> f64 {
    if is_valid_extent(size) {
        return size;
    }
    wwarn!(index, size, "size function returned an invalid size; using 0");
    debug_assert!(
        is_valid_extent(size),
        "size function returned an invalid size (index={index}, size={size})"
    );
    0.0
}

/// Estimated extent of the whole collection.
///
/// Measured items contribute their exact extent; the rest contribute `default_item_size` each.
/// The result depends on the store's current contents and must be recomputed after every
/// extension or reset.
pub fn estimate_total_size(item_count: usize, store: &MetadataStore, default_item_size: f64) -> f64 {
    if item_count == 0 {
        return 0.0;
    }
    let measured = store.len().min(item_count);
    let exact = if measured == 0 {
        0.0
    } else {
        store.entries[measured - 1].end()
    };
    let unknown = item_count - measured;
    exact + unknown as f64 * default_item_size
}
