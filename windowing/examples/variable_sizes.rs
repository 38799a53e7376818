// Example: variable row sizes are measured lazily, only as far as the viewport needs.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use windowing::{Align, EngineOptions, WindowingEngine};

fn main() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let mut engine = WindowingEngine::new(
        EngineOptions::variable(100_000, move |i| {
            counter.fetch_add(1, Ordering::Relaxed);
            if i % 10 == 0 { 64.0 } else { 24.0 }
        })
        .with_viewport_size(600.0)
        .with_estimated_item_size(30.0),
    )
    .expect("valid options");

    println!(
        "initial: range={:?} measured={:?} size_calls={}",
        engine.render_range(),
        engine.metadata().last_measured_index(),
        calls.load(Ordering::Relaxed)
    );

    engine.notify_scroll(50_000.0, 0);
    println!(
        "after jump: range={:?} measured={:?} estimated_total={}",
        engine.render_range(),
        engine.metadata().last_measured_index(),
        engine.estimated_total_size()
    );

    // Row 1_200 grew (e.g. an image finished loading): drop everything measured after it.
    engine.reset_after_index(1_200);
    engine.scroll_to_item(1_250, Align::Center, 10);
    println!(
        "after reset: offset={} measured={:?}",
        engine.scroll_offset(),
        engine.metadata().last_measured_index()
    );
}
