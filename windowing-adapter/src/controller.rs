use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use windowing::{
    Align, ConfigError, EngineOptions, Layout, RenderRange, SavedState, WindowingEngine,
};

use crate::{ItemContext, ItemKeyFn, ItemRenderer, ScrollGeometry, content_extent, index_key};

/// One rendered window, ready for the host to mount.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<O> {
    /// Rendered units for `range.overscan_start..=range.overscan_stop`, in index order.
    pub items: Vec<O>,
    pub range: RenderRange,
    /// Main-axis extent of the inner content container.
    pub estimated_total_size: f64,
    pub layout: Layout,
    pub reversed: bool,
    pub is_scrolling: bool,
    /// The engine's scroll offset at render time. Write it back to the host container with
    /// [`Controller::host_scroll_start`].
    pub scroll_offset: f64,
}

impl<O> Frame<O> {
    /// Hosts disable pointer interaction on the content container while scrolling.
    pub fn pointer_events_enabled(&self) -> bool {
        !self.is_scrolling
    }

    /// `(width, height)` of the inner content container; `None` means "fill".
    pub fn content_extent(&self) -> (Option<f64>, Option<f64>) {
        content_extent(self.layout, self.estimated_total_size)
    }
}

/// A framework-neutral controller that wraps a [`WindowingEngine`] and drives the common render
/// cycle.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` when the host container reports scroll metrics
/// - `tick(now_ms)` from a timer (for `is_scrolling` debouncing)
/// - `render_frame` whenever the host re-renders
#[derive(Clone)]
pub struct Controller<K = usize> {
    engine: WindowingEngine,
    item_key: ItemKeyFn<K>,
    use_is_scrolling: bool,
}

impl Controller<usize> {
    pub fn new(options: EngineOptions) -> Result<Self, ConfigError> {
        Ok(Self::from_engine(WindowingEngine::new(options)?))
    }

    /// Resumes from a state captured with [`Controller::saved_state`].
    pub fn restore(options: EngineOptions, saved: SavedState) -> Result<Self, ConfigError> {
        Ok(Self::from_engine(WindowingEngine::restore(options, saved)?))
    }

    pub fn from_engine(engine: WindowingEngine) -> Self {
        Self {
            engine,
            item_key: index_key(),
            use_is_scrolling: false,
        }
    }
}

impl<K> Controller<K> {
    /// Replaces the index-to-key mapping handed to renderers.
    pub fn with_item_key<K2>(
        self,
        f: impl Fn(usize) -> K2 + Send + Sync + 'static,
    ) -> Controller<K2> {
        Controller {
            engine: self.engine,
            item_key: Arc::new(f),
            use_is_scrolling: self.use_is_scrolling,
        }
    }

    /// When enabled, renderers receive `is_scrolling` in their context (e.g. to draw cheap
    /// placeholders while the list is moving).
    pub fn with_use_is_scrolling(mut self, enabled: bool) -> Self {
        self.use_is_scrolling = enabled;
        self
    }

    pub fn engine(&self) -> &WindowingEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut WindowingEngine {
        &mut self.engine
    }

    pub fn into_engine(self) -> WindowingEngine {
        self.engine
    }

    pub fn saved_state(&self) -> SavedState {
        self.engine.saved_state()
    }

    pub fn on_viewport_size(&mut self, viewport_size: f64) -> Result<(), ConfigError> {
        self.engine.set_viewport_size(viewport_size)
    }

    /// Call this when the host container reports a scroll change (wheel, drag, keyboard).
    ///
    /// Reversed lists are translated so the engine always sees the distance from the logical
    /// start. Returns `true` when the engine's scroll state changed.
    pub fn on_scroll(&mut self, geometry: &ScrollGeometry, now_ms: u64) -> bool {
        let offset = geometry.logical_offset(self.engine.options().reversed);
        self.engine.notify_scroll(offset, now_ms)
    }

    /// Runs `is_scrolling` debouncing. Returns `true` when scrolling just settled; the host
    /// should re-render in that case.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.engine.tick(now_ms)
    }

    /// Deadline of the pending quiet timer, for hosts that schedule their own wakeups.
    pub fn next_tick_ms(&self) -> Option<u64> {
        self.engine.pending_reset_ms()
    }

    pub fn scroll_to_offset(&mut self, offset: f64, now_ms: u64) {
        self.engine.scroll_to(offset, now_ms);
    }

    pub fn scroll_to_item(&mut self, index: usize, align: Align, now_ms: u64) -> f64 {
        self.engine.scroll_to_item(index, align, now_ms)
    }

    /// Physical scroll position the host container should be set to so it matches the engine.
    pub fn host_scroll_start(&self, geometry: &ScrollGeometry) -> f64 {
        crate::host_scroll_start(
            self.engine.scroll_offset(),
            geometry,
            self.engine.options().reversed,
        )
    }

    /// Renders the current window and fires the engine's callbacks for it.
    ///
    /// Items are produced for the overscan range in index order; each gets its memoized style
    /// and key. Callbacks run after every item has been rendered.
    pub fn render_frame<D, R>(&mut self, renderer: &mut R, data: &D) -> Frame<R::Output>
    where
        D: ?Sized,
        R: ItemRenderer<K, D>,
    {
        let range = self.engine.render_range();
        let is_scrolling = self.engine.is_scrolling();
        let item_count = self.engine.item_count();

        let mut items = Vec::new();
        for index in range.indices(item_count) {
            let Some(style) = self.engine.item_style(index) else {
                continue;
            };
            items.push(renderer.render(ItemContext {
                index,
                key: (self.item_key)(index),
                style,
                data,
                is_scrolling: self.use_is_scrolling.then_some(is_scrolling),
            }));
        }

        let frame = Frame {
            items,
            range,
            estimated_total_size: self.engine.estimated_total_size(),
            layout: self.engine.options().layout,
            reversed: self.engine.options().reversed,
            is_scrolling,
            scroll_offset: self.engine.scroll_offset(),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "windowing_adapter",
            overscan_start = range.overscan_start,
            overscan_stop = range.overscan_stop,
            rendered = frame.items.len(),
            is_scrolling,
            "render_frame"
        );

        self.engine.commit();
        frame
    }

    /// Cancels pending timers. Call when the host list is unmounted.
    pub fn teardown(&mut self) {
        self.engine.teardown();
    }
}

impl<K> fmt::Debug for Controller<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("engine", &self.engine)
            .field("use_is_scrolling", &self.use_is_scrolling)
            .finish_non_exhaustive()
    }
}
