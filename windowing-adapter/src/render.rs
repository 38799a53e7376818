use windowing::ItemStyle;

/// Everything a renderer needs to produce the output for one index.
#[derive(Debug)]
pub struct ItemContext<'a, K, D: ?Sized> {
    pub index: usize,
    pub key: K,
    pub style: ItemStyle,
    pub data: &'a D,
    /// Only populated when the controller was configured with `use_is_scrolling`.
    pub is_scrolling: Option<bool>,
}

/// The host's render hook: produces one rendered unit per windowed index.
///
/// The engine never sees `Output`; it can be a widget, a DOM node handle, a line of text, etc.
/// Any `FnMut(ItemContext<'_, K, D>) -> O` closure is a renderer.
pub trait ItemRenderer<K, D: ?Sized> {
    type Output;

    fn render(&mut self, cx: ItemContext<'_, K, D>) -> Self::Output;
}

impl<K, D: ?Sized, O, F> ItemRenderer<K, D> for F
where
    F: FnMut(ItemContext<'_, K, D>) -> O,
{
    type Output = O;

    fn render(&mut self, cx: ItemContext<'_, K, D>) -> O {
        self(cx)
    }
}
