use alloc::sync::Arc;

use crate::{ItemMetadata, Layout, RenderRange, ScrollState};

/// Default estimate used for not-yet-measured items.
pub const DEFAULT_ESTIMATED_ITEM_SIZE: f64 = 50.0;

/// Default number of extra items rendered in the scroll direction.
pub const DEFAULT_OVERSCAN_COUNT: usize = 2;

/// Quiet interval after which an active scroll is considered settled.
pub const DEFAULT_IS_SCROLLING_RESET_DELAY_MS: u64 = 150;

/// A size function: `size_fn(index)` returns the item's extent along the windowing axis.
///
/// It must be pure for a given collection version. When the true size of an already measured
/// item changes, call [`crate::WindowingEngine::reset_after_index`].
pub type SizeFn = Arc<dyn Fn(usize) -> f64 + Send + Sync>;

/// Called with the committed range after each render cycle.
pub type OnRangeRenderedCallback = Arc<dyn Fn(RenderRange) + Send + Sync>;

/// Called with the committed scroll state after each render cycle.
pub type OnScrollCallback = Arc<dyn Fn(ScrollState) + Send + Sync>;

/// Called with the measured prefix whenever it grew or shrank since the previous render cycle.
///
/// Persist the slice together with the scroll offset to resume at the exact same position.
pub type OnMetadataUpdatedCallback = Arc<dyn Fn(&[ItemMetadata]) + Send + Sync>;

/// How item sizes are obtained.
#[derive(Clone)]
pub enum ItemSize {
    /// Every item has the same size. Offsets are computed arithmetically.
    Fixed(f64),
    /// Sizes come from a function and are cached lazily.
    Variable(SizeFn),
}

impl ItemSize {
    pub fn variable(f: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::Variable(Arc::new(f))
    }

    /// Identity comparison: the same fixed value, or the very same function allocation.
    pub(crate) fn same_source(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fixed(a), Self::Fixed(b)) => a.to_bits() == b.to_bits(),
            (Self::Variable(a), Self::Variable(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl core::fmt::Debug for ItemSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Self::Variable(_) => f.write_str("Variable(..)"),
        }
    }
}

/// Configuration for [`crate::WindowingEngine`].
///
/// Cheap to clone: closures live behind `Arc`s.
#[derive(Clone)]
pub struct EngineOptions {
    pub item_count: usize,
    /// Required. [`crate::WindowingEngine::new`] fails with
    /// [`crate::ConfigError::MissingItemSize`] when unset.
    pub item_size: Option<ItemSize>,
    /// Stand-in size for items beyond the measured prefix when estimating the total extent.
    pub estimated_item_size: f64,
    /// Extent of the viewport along the windowing axis.
    pub viewport_size: f64,
    pub overscan_count: usize,
    pub layout: Layout,
    /// Offsets are measured from the far end of the container (e.g. chat timelines).
    pub reversed: bool,
    pub initial_scroll_offset: f64,
    pub is_scrolling_reset_delay_ms: u64,
    pub on_range_rendered: Option<OnRangeRenderedCallback>,
    pub on_scroll: Option<OnScrollCallback>,
    pub on_metadata_updated: Option<OnMetadataUpdatedCallback>,
}

impl EngineOptions {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            item_size: None,
            estimated_item_size: DEFAULT_ESTIMATED_ITEM_SIZE,
            viewport_size: 0.0,
            overscan_count: DEFAULT_OVERSCAN_COUNT,
            layout: Layout::Vertical,
            reversed: false,
            initial_scroll_offset: 0.0,
            is_scrolling_reset_delay_ms: DEFAULT_IS_SCROLLING_RESET_DELAY_MS,
            on_range_rendered: None,
            on_scroll: None,
            on_metadata_updated: None,
        }
    }

    /// Options for a list of `item_count` items that all share `size`.
    pub fn fixed(item_count: usize, size: f64) -> Self {
        Self::new(item_count).with_item_size(ItemSize::Fixed(size))
    }

    /// Options for a list whose sizes come from `size_fn`.
    pub fn variable(
        item_count: usize,
        size_fn: impl Fn(usize) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self::new(item_count).with_item_size(ItemSize::variable(size_fn))
    }

    pub fn with_item_size(mut self, item_size: ItemSize) -> Self {
        self.item_size = Some(item_size);
        self
    }

    pub fn with_estimated_item_size(mut self, size: f64) -> Self {
        self.estimated_item_size = size;
        self
    }

    pub fn with_viewport_size(mut self, viewport_size: f64) -> Self {
        self.viewport_size = viewport_size;
        self
    }

    pub fn with_overscan_count(mut self, overscan_count: usize) -> Self {
        self.overscan_count = overscan_count;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub fn with_initial_scroll_offset(mut self, offset: f64) -> Self {
        self.initial_scroll_offset = offset;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_on_range_rendered(
        mut self,
        on_range_rendered: Option<impl Fn(RenderRange) + Send + Sync + 'static>,
    ) -> Self {
        self.on_range_rendered = on_range_rendered.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(ScrollState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_metadata_updated(
        mut self,
        on_metadata_updated: Option<impl Fn(&[ItemMetadata]) + Send + Sync + 'static>,
    ) -> Self {
        self.on_metadata_updated = on_metadata_updated.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for EngineOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EngineOptions")
            .field("item_count", &self.item_count)
            .field("item_size", &self.item_size)
            .field("estimated_item_size", &self.estimated_item_size)
            .field("viewport_size", &self.viewport_size)
            .field("overscan_count", &self.overscan_count)
            .field("layout", &self.layout)
            .field("reversed", &self.reversed)
            .field("initial_scroll_offset", &self.initial_scroll_offset)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}
