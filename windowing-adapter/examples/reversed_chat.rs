use windowing::{Align, EngineOptions};
use windowing_adapter::{Controller, ItemContext, ScrollGeometry};

fn main() {
    // Example: a bottom-anchored chat log. The engine counts offsets from the newest message,
    // the adapter converts to and from the container's physical scroll position.
    let mut c = Controller::new(
        EngineOptions::fixed(200, 40.0)
            .with_viewport_size(200.0)
            .with_reversed(true),
    )
    .expect("valid options")
    .with_item_key(|i| 10_000u64 - i as u64);

    let geometry = ScrollGeometry::new(7_800.0, 8_000.0, 200.0);
    c.on_scroll(&geometry, 0);
    println!("logical offset={}", c.engine().scroll_offset());

    let mut render = |cx: ItemContext<'_, u64, ()>| (cx.key, cx.style);
    let frame = c.render_frame(&mut render, &());
    println!("range={:?}", frame.range);

    c.scroll_to_item(50, Align::Start, 10);
    println!(
        "scroll_to_item(50): write scroll_start={}",
        c.host_scroll_start(&geometry)
    );
}
