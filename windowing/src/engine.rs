use crate::error::is_valid_extent;
use crate::metadata::{MetadataStore, estimate_total_size};
use crate::range::{
    compute_overscan_range, find_start_index, find_stop_index, fixed_metadata, fixed_start_index,
    fixed_stop_index, sanitize_offset,
};
use crate::scroll::{ScrollStateMachine, Settle};
use crate::style::StyleCache;
use crate::{
    Align, ConfigError, EngineOptions, ItemMetadata, ItemSize, ItemStyle, RenderRange,
    SavedState, ScrollDirection, ScrollState,
};

/// A headless list windowing engine.
///
/// The engine holds no UI objects. The host:
/// - feeds it scroll activity (`notify_scroll`, `scroll_to`, `scroll_to_item`) and time (`tick`),
/// - asks it once per render cycle for the [`RenderRange`] and the per-item [`ItemStyle`]s,
/// - reads [`Self::estimated_total_size`] after styles are computed, and
/// - calls [`Self::commit`] once the frame is on screen so `on_range_rendered`/`on_scroll` fire.
///
/// Every operation runs synchronously on the caller's turn. Offsets of variable-size items are
/// measured lazily and cached; see [`MetadataStore`].
#[derive(Clone, Debug)]
pub struct WindowingEngine {
    options: EngineOptions,
    item_size: ItemSize,
    store: MetadataStore,
    scroll: ScrollStateMachine,
    styles: StyleCache,
    last_rendered: Option<RenderRange>,
    last_scroll: Option<ScrollState>,
    last_metadata_revision: u64,
}

impl WindowingEngine {
    /// Creates an engine, rejecting incomplete or invalid configuration.
    pub fn new(options: EngineOptions) -> Result<Self, ConfigError> {
        let item_size = validate(&options)?;
        wdebug!(
            item_count = options.item_count,
            overscan_count = options.overscan_count,
            viewport_size = options.viewport_size,
            "WindowingEngine::new"
        );
        Ok(Self {
            scroll: ScrollStateMachine::new(
                options.initial_scroll_offset,
                options.is_scrolling_reset_delay_ms,
            ),
            item_size,
            store: MetadataStore::new(),
            styles: StyleCache::new(),
            last_rendered: None,
            last_scroll: None,
            last_metadata_revision: 0,
            options,
        })
    }

    /// Recreates an engine from a [`SavedState`] captured earlier.
    ///
    /// The saved offset takes precedence over `options.initial_scroll_offset`. Saved metadata
    /// beyond `options.item_count` is dropped.
    pub fn restore(options: EngineOptions, saved: SavedState) -> Result<Self, ConfigError> {
        let mut engine = Self::new(options)?;
        let mut store = MetadataStore::from_entries(saved.metadata)
            .map_err(|index| ConfigError::SavedStateMismatch { index })?;
        store.truncate_to_count(engine.options.item_count);
        wdebug!(
            measured = store.len(),
            scroll_offset = saved.scroll_offset,
            "WindowingEngine::restore"
        );
        engine.last_metadata_revision = store.revision();
        engine.store = store;
        engine.scroll = ScrollStateMachine::new(
            saved.scroll_offset,
            engine.options.is_scrolling_reset_delay_ms,
        );
        Ok(engine)
    }

    /// Captures the state needed to resume at the exact same position.
    pub fn saved_state(&self) -> SavedState {
        SavedState {
            metadata: self.store.entries().to_vec(),
            scroll_offset: self.scroll.offset(),
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn item_count(&self) -> usize {
        self.options.item_count
    }

    pub fn viewport_size(&self) -> f64 {
        self.options.viewport_size
    }

    pub fn metadata(&self) -> &MetadataStore {
        &self.store
    }

    pub fn style_cache(&self) -> &StyleCache {
        &self.styles
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.scroll.direction()
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_scrolling()
    }

    /// The pending quiet-period deadline, if any (host milliseconds).
    pub fn pending_reset_ms(&self) -> Option<u64> {
        self.scroll.timer().deadline_ms()
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        if self.options.item_count == item_count {
            return;
        }
        if item_count < self.options.item_count {
            self.store.truncate_to_count(item_count);
            self.styles.clear_from(item_count);
        }
        wtrace!(from = self.options.item_count, to = item_count, "set_item_count");
        self.options.item_count = item_count;
    }

    pub fn set_viewport_size(&mut self, viewport_size: f64) -> Result<(), ConfigError> {
        if !is_valid_extent(viewport_size) {
            return Err(ConfigError::InvalidViewportSize(viewport_size));
        }
        self.options.viewport_size = viewport_size;
        Ok(())
    }

    pub fn set_overscan_count(&mut self, overscan_count: usize) {
        self.options.overscan_count = overscan_count;
    }

    /// Replaces the size source.
    ///
    /// A source with a different identity (another function allocation, or another fixed value)
    /// invalidates every cached style. Cached metadata is kept: when sizes of already measured
    /// items differ under the new source, also call [`Self::reset_after_index`].
    pub fn set_item_size(&mut self, item_size: ItemSize) -> Result<(), ConfigError> {
        validate_item_size(&item_size)?;
        if !self.item_size.same_source(&item_size) {
            wtrace!("set_item_size: size source changed, clearing styles");
            self.styles.clear();
        }
        self.options.item_size = Some(item_size.clone());
        self.item_size = item_size;
        Ok(())
    }

    pub fn set_on_range_rendered(
        &mut self,
        f: Option<impl Fn(RenderRange) + Send + Sync + 'static>,
    ) {
        self.options.on_range_rendered = f.map(|f| alloc::sync::Arc::new(f) as _);
        self.last_rendered = None;
    }

    pub fn set_on_scroll(&mut self, f: Option<impl Fn(ScrollState) + Send + Sync + 'static>) {
        self.options.on_scroll = f.map(|f| alloc::sync::Arc::new(f) as _);
        self.last_scroll = None;
    }

    pub fn set_on_metadata_updated(
        &mut self,
        f: Option<impl Fn(&[ItemMetadata]) + Send + Sync + 'static>,
    ) {
        self.options.on_metadata_updated = f.map(|f| alloc::sync::Arc::new(f) as _);
        self.last_metadata_revision = self.store.revision();
    }

    /// Metadata for `index`, measuring it (and everything before it) if needed.
    pub fn item_metadata(&mut self, index: usize) -> Option<ItemMetadata> {
        (index < self.options.item_count).then(|| self.metadata_at(index))
    }

    fn metadata_at(&mut self, index: usize) -> ItemMetadata {
        match &self.item_size {
            ItemSize::Fixed(size) => fixed_metadata(index, *size),
            ItemSize::Variable(f) => self.store.ensure(index, |i| f(i)),
        }
    }

    /// Total extent of the collection: exact for measured items, estimated for the rest.
    ///
    /// Read this after styles for the frame have been computed so that any items measured while
    /// computing them are reflected.
    pub fn estimated_total_size(&self) -> f64 {
        match &self.item_size {
            ItemSize::Fixed(size) => self.options.item_count as f64 * *size,
            ItemSize::Variable(_) => estimate_total_size(
                self.options.item_count,
                &self.store,
                self.options.estimated_item_size,
            ),
        }
    }

    pub fn max_scroll_offset(&self) -> f64 {
        (self.estimated_total_size() - self.options.viewport_size).max(0.0)
    }

    /// Clamps to `[0, max_scroll_offset]`; NaN becomes 0.
    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        sanitize_offset(offset).min(self.max_scroll_offset())
    }

    /// Range to render for the current scroll state.
    pub fn render_range(&mut self) -> RenderRange {
        let scroll = self.scroll.state();
        self.render_range_for(&scroll)
    }

    /// Range to render for an arbitrary scroll state, using this engine's item count, overscan
    /// and size source.
    pub fn render_range_for(&mut self, scroll: &ScrollState) -> RenderRange {
        let item_count = self.options.item_count;
        if item_count == 0 {
            return RenderRange::EMPTY;
        }
        let (start, stop) = self.visible_bounds(scroll.offset);
        compute_overscan_range(
            start,
            stop,
            scroll.direction,
            self.options.overscan_count,
            item_count,
        )
    }

    /// Start/stop (inclusive) of the items intersecting the viewport at `offset`.
    pub fn visible_bounds(&mut self, offset: f64) -> (usize, usize) {
        let item_count = self.options.item_count;
        let viewport = self.options.viewport_size;
        match &self.item_size {
            ItemSize::Fixed(size) => {
                let start = fixed_start_index(item_count, *size, offset);
                let stop = fixed_stop_index(item_count, *size, start, offset, viewport);
                (start, stop)
            }
            ItemSize::Variable(f) => {
                let start = find_start_index(&mut self.store, item_count, offset, |i| f(i));
                let stop = find_stop_index(
                    &mut self.store,
                    item_count,
                    start,
                    offset,
                    viewport,
                    |i| f(i),
                );
                (start, stop)
            }
        }
    }

    /// Memoized placement for `index`. Returns `None` when out of range.
    pub fn item_style(&mut self, index: usize) -> Option<ItemStyle> {
        if index >= self.options.item_count {
            return None;
        }
        if let Some(style) = self.styles.get(index) {
            return Some(style);
        }
        let m = self.metadata_at(index);
        let layout = self.options.layout;
        let reversed = self.options.reversed;
        Some(self.styles.get_or_insert_with(index, || ItemStyle {
            layout,
            start: m.offset,
            size: m.size,
            reversed,
        }))
    }

    /// Calls `f` for every index of the current render range, in ascending order.
    pub fn for_each_item_style(&mut self, mut f: impl FnMut(usize, ItemStyle)) {
        let range = self.render_range();
        for index in range.indices(self.options.item_count) {
            if let Some(style) = self.item_style(index) {
                f(index, style);
            }
        }
    }

    /// User scroll notification from the host. Equal offsets are ignored.
    ///
    /// Returns `true` when the scroll state changed.
    pub fn notify_scroll(&mut self, raw_offset: f64, now_ms: u64) -> bool {
        self.scroll.notify_scroll(raw_offset, now_ms)
    }

    /// Programmatic scroll to a raw offset (negative/NaN become 0).
    pub fn scroll_to(&mut self, offset: f64, now_ms: u64) {
        wtrace!(offset, now_ms, "scroll_to");
        self.scroll.request_scroll(offset, now_ms);
    }

    /// Programmatic scroll to an item. The index is clamped into range.
    ///
    /// Returns the applied offset (the current offset when the collection is empty).
    pub fn scroll_to_item(&mut self, index: usize, align: Align, now_ms: u64) -> f64 {
        if self.options.item_count == 0 {
            return self.scroll.offset();
        }
        let offset = self.offset_for_item(index, align);
        wtrace!(index, offset, now_ms, "scroll_to_item");
        self.scroll.request_scroll(offset, now_ms);
        offset
    }

    /// Offset that `scroll_to_item(index, align)` would apply, clamped to
    /// `[0, max_scroll_offset]`.
    ///
    /// `Align::Auto` keeps the current offset when the item is fully visible or when it is larger
    /// than the viewport and already covers it; otherwise an item starting above the viewport is
    /// start-aligned and one ending below it is end-aligned.
    pub fn offset_for_item(&mut self, index: usize, align: Align) -> f64 {
        let item_count = self.options.item_count;
        if item_count == 0 {
            return 0.0;
        }
        let item = self.metadata_at(index.min(item_count - 1));
        let view = self.options.viewport_size;
        let current = self.scroll.offset();
        let current_end = current + view;

        let target = match align {
            Align::Start => item.offset,
            Align::End => item.end() - view,
            Align::Center => item.offset - (view - item.size) / 2.0,
            Align::Auto => {
                let fully_visible = item.offset >= current && item.end() <= current_end;
                let covers_viewport = item.offset <= current && item.end() >= current_end;
                if fully_visible || covers_viewport {
                    current
                } else if item.offset < current {
                    item.offset
                } else {
                    item.end() - view
                }
            }
        };

        self.clamp_scroll_offset(target)
    }

    /// Drops cached metadata and styles at and after `index`.
    ///
    /// Call this when the true size of a measured item changed. The index is clamped to the
    /// item count.
    pub fn reset_after_index(&mut self, index: usize) {
        let index = index.min(self.options.item_count);
        self.store.reset_after_index(index);
        self.styles.clear_from(index);
    }

    /// Advances host time and settles scrolling once the quiet period has elapsed.
    ///
    /// Returns `true` when `Active → Idle` happened. Whenever the quiet timer fires, including
    /// after a purely programmatic scroll, the style cache is cleared once the new state is
    /// committed, so it only ever holds styles for the window around the last resting position.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.scroll.poll(now_ms) {
            Settle::Settled => {
                self.styles.clear();
                true
            }
            Settle::Quiet => {
                self.styles.clear();
                false
            }
            Settle::Pending => false,
        }
    }

    /// Fires host callbacks for the frame just rendered.
    ///
    /// Each callback is skipped when its argument equals the one passed on the previous call.
    /// `on_range_rendered` is not called for an empty collection. `on_metadata_updated` fires
    /// only when the measured prefix changed since the last commit.
    pub fn commit(&mut self) {
        if let Some(cb) = self.options.on_range_rendered.clone() {
            if self.options.item_count > 0 {
                let range = self.render_range();
                if self.last_rendered != Some(range) {
                    self.last_rendered = Some(range);
                    cb(range);
                }
            }
        }

        if let Some(cb) = self.options.on_scroll.clone() {
            let state = self.scroll.state();
            if self.last_scroll != Some(state) {
                self.last_scroll = Some(state);
                cb(state);
            }
        }

        if let Some(cb) = self.options.on_metadata_updated.clone() {
            let revision = self.store.revision();
            if self.last_metadata_revision != revision {
                self.last_metadata_revision = revision;
                cb(self.store.entries());
            }
        }
    }

    /// Cancels the pending quiet timer. Call when the host list goes away.
    pub fn teardown(&mut self) {
        wtrace!("teardown");
        self.scroll.teardown();
    }
}

fn validate(options: &EngineOptions) -> Result<ItemSize, ConfigError> {
    let item_size = options
        .item_size
        .clone()
        .ok_or(ConfigError::MissingItemSize)?;
    validate_item_size(&item_size)?;
    if !is_valid_extent(options.estimated_item_size) {
        return Err(ConfigError::InvalidEstimatedItemSize(
            options.estimated_item_size,
        ));
    }
    if !is_valid_extent(options.viewport_size) {
        return Err(ConfigError::InvalidViewportSize(options.viewport_size));
    }
    Ok(item_size)
}

fn validate_item_size(item_size: &ItemSize) -> Result<(), ConfigError> {
    match item_size {
        ItemSize::Fixed(size) if !is_valid_extent(*size) => {
            Err(ConfigError::InvalidFixedItemSize(*size))
        }
        _ => Ok(()),
    }
}
