use windowing::Layout;

/// Raw scroll metrics reported by a host scroll container along the windowing axis.
///
/// For a vertical list these are `scrollTop`/`scrollHeight`/`clientHeight` (or the equivalents of
/// your toolkit); for a horizontal list the width-based counterparts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollGeometry {
    /// Distance scrolled from the physical start of the container.
    pub scroll_start: f64,
    /// Full scrollable extent of the content.
    pub scroll_extent: f64,
    /// Visible extent of the container.
    pub client_extent: f64,
}

impl ScrollGeometry {
    pub fn new(scroll_start: f64, scroll_extent: f64, client_extent: f64) -> Self {
        Self {
            scroll_start,
            scroll_extent,
            client_extent,
        }
    }

    pub fn max_scroll_start(&self) -> f64 {
        (self.scroll_extent - self.client_extent).max(0.0)
    }

    /// Distance left to scroll before the physical end of the container.
    pub fn scroll_end(&self) -> f64 {
        self.scroll_extent - self.client_extent - self.scroll_start
    }

    /// The offset the engine works with. Reversed lists count from the physical end.
    pub fn logical_offset(&self, reversed: bool) -> f64 {
        if reversed {
            self.scroll_end()
        } else {
            self.scroll_start
        }
    }
}

/// Converts an engine offset back into the physical scroll position to write to the host
/// container, clamped to what the container can actually scroll.
pub fn host_scroll_start(offset: f64, geometry: &ScrollGeometry, reversed: bool) -> f64 {
    let max = geometry.max_scroll_start();
    // `f64::max` drops NaN.
    let offset = offset.max(0.0);
    let start = if reversed { max - offset } else { offset };
    start.clamp(0.0, max)
}

/// Extent of the inner content container: the estimated total along the windowing axis, `None`
/// (fill) across it.
pub fn content_extent(layout: Layout, total_size: f64) -> (Option<f64>, Option<f64>) {
    match layout {
        Layout::Vertical => (None, Some(total_size)),
        Layout::Horizontal => (Some(total_size), None),
    }
}
