// Example: capture state on teardown and resume at the exact same item.
use windowing::{Align, EngineOptions, WindowingEngine};

fn options() -> EngineOptions {
    EngineOptions::variable(10_000, |i| 18.0 + (i % 7) as f64 * 3.0).with_viewport_size(300.0)
}

fn main() {
    let mut engine = WindowingEngine::new(options()).expect("valid options");
    engine.scroll_to_item(4_321, Align::Start, 0);
    engine.teardown();

    let saved = engine.saved_state();
    println!(
        "saved: offset={} measured={:?}",
        saved.scroll_offset,
        saved.last_measured_index()
    );

    let mut resumed = WindowingEngine::restore(options(), saved).expect("state matches options");
    println!("resumed: range={:?}", resumed.render_range());
}
