//! Host-side glue for the `windowing` crate.
//!
//! The `windowing` engine is UI-agnostic and focuses on the core math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A render hook ([`ItemRenderer`]) receiving index, key, memoized style and host data
//! - Item keys (defaulting to the index)
//! - Scroll geometry translation for reversed lists
//! - A [`Controller`] that runs the scroll → tick → render → callbacks cycle
//!
//! ```
//! use windowing::EngineOptions;
//! use windowing_adapter::{Controller, ItemContext, ScrollGeometry};
//!
//! let mut c = Controller::new(EngineOptions::fixed(1_000, 20.0).with_viewport_size(100.0))
//!     .unwrap();
//! c.on_scroll(&ScrollGeometry::new(400.0, 20_000.0, 100.0), 0);
//!
//! let rows: [&'static str; 1_000] = ["a"; 1_000];
//! let mut render =
//!     |cx: ItemContext<'_, usize, [&'static str]>| (cx.index, cx.data[cx.index]);
//! let frame = c.render_frame(&mut render, &rows[..]);
//! assert_eq!(frame.items.first(), Some(&(19, "a")));
//! assert!(!frame.pointer_events_enabled());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod geometry;
mod key;
mod render;


pub use controller::{Controller, Frame};
pub use geometry::{ScrollGeometry, content_extent, host_scroll_start};
pub use key::{ItemKeyFn, index_key};
pub use render::{ItemContext, ItemRenderer};
