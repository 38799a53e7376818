// Example: fixed-size rows, a scroll notification and scroll-to helpers.
use windowing::{Align, EngineOptions, WindowingEngine};

fn main() {
    let mut engine =
        WindowingEngine::new(EngineOptions::fixed(1_000_000, 20.0).with_viewport_size(400.0))
            .expect("valid options");

    engine.notify_scroll(123_456.0, 0);
    println!("total_size={}", engine.estimated_total_size());
    let range = engine.render_range();
    println!("range={range:?}");
    println!("first_style={:?}", engine.item_style(range.overscan_start));

    let off = engine.scroll_to_item(999_999, Align::End, 16);
    println!("after scroll_to_item: offset={off}");

    // Nothing happens until the host clock passes the quiet period.
    println!("settled at 100ms: {}", engine.tick(100));
    println!("settled at 166ms: {}", engine.tick(166));
}
