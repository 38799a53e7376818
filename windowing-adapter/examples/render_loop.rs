use windowing::{EngineOptions, RenderRange};
use windowing_adapter::{Controller, ItemContext, ScrollGeometry};

fn main() {
    // Example: a host loop driving the controller without holding any UI objects.
    //
    // A real adapter would:
    // - forward container scroll events to `on_scroll`
    // - call `tick(now_ms)` from a timer and re-render when it returns true
    // - mount `frame.items` inside a content container sized by `frame.content_extent()`
    let rows: Vec<String> = (0..500).map(|i| format!("message #{i}")).collect();
    let mut c = Controller::new(
        EngineOptions::fixed(rows.len(), 24.0)
            .with_viewport_size(120.0)
            .with_on_range_rendered(Some(|r: RenderRange| println!("  on_range_rendered {r:?}"))),
    )
    .expect("valid options")
    .with_use_is_scrolling(true);

    let mut render = |cx: ItemContext<'_, usize, [String]>| {
        let marker = if cx.is_scrolling == Some(true) { "~" } else { " " };
        format!("{marker} {:>6.0} {}", cx.style.top(), cx.data[cx.index])
    };

    for (now_ms, scroll_start) in [(0, 0.0), (16, 240.0), (32, 480.0)] {
        c.on_scroll(&ScrollGeometry::new(scroll_start, 12_000.0, 120.0), now_ms);
        let frame = c.render_frame(&mut render, &rows[..]);
        println!(
            "t={now_ms} pointer_events={} rows={}",
            frame.pointer_events_enabled(),
            frame.items.len()
        );
    }

    if c.tick(32 + 150) {
        let frame = c.render_frame(&mut render, &rows[..]);
        for line in frame.items {
            println!("{line}");
        }
    }
}
