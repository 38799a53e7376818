//! Offset → index resolution and overscan.

use crate::metadata::MetadataStore;
use crate::{ItemMetadata, RenderRange, ScrollDirection};

/// Clamps host-provided offsets: negative and NaN values become 0.
pub(crate) fn sanitize_offset(offset: f64) -> f64 {
    if offset.is_nan() || offset < 0.0 {
        0.0
    } else {
        offset
    }
}

/// Returns the greatest index whose offset is `<= target_offset`, clamped to `[0, item_count-1]`.
///
/// When the target lies inside the measured prefix this is a plain binary search. Otherwise the
/// store is extended with an exponential probe (`last, last+1, last+3, last+7, ...`) until a probe
/// lands strictly past the target, so a far jump into a large collection only measures `O(log n)` probes
/// beyond what the final answer needs.
pub fn find_start_index(
    store: &mut MetadataStore,
    item_count: usize,
    target_offset: f64,
    mut size_fn: impl FnMut(usize) -> f64,
) -> usize {
    if item_count == 0 {
        return 0;
    }
    let target = sanitize_offset(target_offset);
    let last = store.last_measured_index().map(|i| i.min(item_count - 1));

    if let Some(last) = last {
        // Zero-size items may share the target offset beyond `last`, so only a measured offset
        // strictly past the target bounds the answer.
        if store.ensure(last, &mut size_fn).offset > target {
            return store.search(last, target);
        }
    }

    let mut index = last.unwrap_or(0);
    let mut interval = 1usize;
    while index < item_count && store.ensure(index, &mut size_fn).offset <= target {
        index = index.saturating_add(interval);
        interval = interval.saturating_mul(2);
    }

    let bound = index.min(item_count - 1);
    store.ensure(bound, &mut size_fn);
    store.search(bound, target)
}

/// Returns the last index that is at least partially visible in
/// `[scroll_offset, scroll_offset + viewport_size)`, starting the walk at `start_index`.
///
/// Never exceeds `item_count - 1`, even when the viewport extends past the content.
pub fn find_stop_index(
    store: &mut MetadataStore,
    item_count: usize,
    start_index: usize,
    scroll_offset: f64,
    viewport_size: f64,
    mut size_fn: impl FnMut(usize) -> f64,
) -> usize {
    walk_stop_index(
        item_count,
        start_index,
        sanitize_offset(scroll_offset) + viewport_size,
        |i| store.ensure(i, &mut size_fn),
    )
}

/// Start index for a list whose items all share `item_size`.
pub fn fixed_start_index(item_count: usize, item_size: f64, target_offset: f64) -> usize {
    if item_count == 0 {
        return 0;
    }
    if item_size <= 0.0 {
        return item_count - 1;
    }
    // `as` truncates toward zero, which is floor for non-negative values; it saturates on
    // infinity.
    let index = (sanitize_offset(target_offset) / item_size) as usize;
    index.min(item_count - 1)
}

/// Stop index for a list whose items all share `item_size`.
///
/// Closed form: `start + ceil((offset + viewport - start * size) / size) - 1`, clamped to
/// `[start_index, item_count - 1]`.
pub fn fixed_stop_index(
    item_count: usize,
    item_size: f64,
    start_index: usize,
    scroll_offset: f64,
    viewport_size: f64,
) -> usize {
    if item_count == 0 {
        return 0;
    }
    let last = item_count - 1;
    let start = start_index.min(last);
    if item_size <= 0.0 {
        return last;
    }
    let remaining = sanitize_offset(scroll_offset) + viewport_size - start as f64 * item_size;
    let visible = ceil_count(remaining / item_size);
    start.saturating_add(visible.saturating_sub(1)).min(last)
}

/// `ceil` for non-negative quotients; anything else (including NaN) counts as 0.
fn ceil_count(x: f64) -> usize {
    if x.is_nan() || x <= 0.0 {
        return 0;
    }
    let whole = x as usize;
    if (whole as f64) < x {
        whole.saturating_add(1)
    } else {
        whole
    }
}

pub(crate) fn fixed_metadata(index: usize, item_size: f64) -> ItemMetadata {
    ItemMetadata {
        offset: index as f64 * item_size,
        size: item_size,
    }
}

fn walk_stop_index(
    item_count: usize,
    start_index: usize,
    max_offset: f64,
    mut metadata_at: impl FnMut(usize) -> ItemMetadata,
) -> usize {
    if item_count == 0 {
        return 0;
    }
    let mut stop = start_index.min(item_count - 1);
    let mut end = metadata_at(stop).end();
    while stop < item_count - 1 && end < max_offset {
        stop += 1;
        end += metadata_at(stop).size;
    }
    stop
}

/// Expands the visible range by the overscan margin.
///
/// The margin is `max(1, overscan_count)` in the direction of travel and exactly 1 in the other
/// direction: there is always at least one rendered item past each visible edge, so sequential
/// keyboard focus never wraps back into the window even with `overscan_count == 0`.
pub fn compute_overscan_range(
    visible_start: usize,
    visible_stop: usize,
    direction: ScrollDirection,
    overscan_count: usize,
    item_count: usize,
) -> RenderRange {
    if item_count == 0 {
        return RenderRange::EMPTY;
    }
    let last = item_count - 1;
    let visible_start = visible_start.min(last);
    let visible_stop = visible_stop.clamp(visible_start, last);

    let backward = match direction {
        ScrollDirection::Backward => overscan_count.max(1),
        ScrollDirection::Forward => 1,
    };
    let forward = match direction {
        ScrollDirection::Forward => overscan_count.max(1),
        ScrollDirection::Backward => 1,
    };

    RenderRange {
        overscan_start: visible_start.saturating_sub(backward),
        overscan_stop: visible_stop.saturating_add(forward).min(last),
        visible_start,
        visible_stop,
    }
}
