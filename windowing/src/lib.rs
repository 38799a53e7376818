//! A headless windowing engine for very large ordered collections.
//!
//! For host-side glue (render hooks, item keys, scroll geometry of reversed lists), see the
//! `windowing-adapter` crate.
//!
//! Only the slice of a list that intersects a fixed-size viewport is rendered. This crate owns
//! the hard part of that: mapping a scroll offset to the range of item indexes to render, mapping
//! an item index back to a scroll offset, lazily caching per-item `{offset, size}` metadata when
//! sizes vary, overscan, and the debounced `is_scrolling` state machine.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the viewport size along the windowing axis
//! - scroll notifications and a millisecond clock (`tick`)
//! - item sizes, either fixed or as a (pure) size function
//!
//! ```
//! use windowing::{Align, EngineOptions, WindowingEngine};
//!
//! let mut engine = WindowingEngine::new(
//!     EngineOptions::variable(10_000, |i| if i % 3 == 0 { 40.0 } else { 20.0 })
//!         .with_viewport_size(200.0),
//! )
//! .unwrap();
//!
//! engine.scroll_to_item(5_000, Align::Start, 0);
//! let range = engine.render_range();
//! assert_eq!(range.visible_start, 5_000);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod error;
mod metadata;
mod options;
mod range;
mod scroll;
mod state;
mod style;
mod types;


pub use engine::WindowingEngine;
pub use error::ConfigError;
pub use metadata::{MetadataStore, estimate_total_size};
pub use options::{
    DEFAULT_ESTIMATED_ITEM_SIZE, DEFAULT_IS_SCROLLING_RESET_DELAY_MS, DEFAULT_OVERSCAN_COUNT,
    EngineOptions, ItemSize, OnMetadataUpdatedCallback, OnRangeRenderedCallback, OnScrollCallback,
    SizeFn,
};
pub use range::{
    compute_overscan_range, find_start_index, find_stop_index, fixed_start_index,
    fixed_stop_index,
};
pub use scroll::{QuietTimer, ScrollStateMachine, Settle};
pub use state::SavedState;
pub use style::StyleCache;
pub use types::{
    Align, ItemIndex, ItemMetadata, ItemStyle, Layout, RenderRange, ScrollDirection, ScrollState,
};
