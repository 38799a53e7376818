use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::ConfigError;

pub type ItemIndex = usize;

/// Where a target item should land inside the viewport after `scroll_to_item`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    /// Scroll only as far as needed to make the item fully visible.
    #[default]
    Auto,
    Start,
    Center,
    End,
}

impl FromStr for Align {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            other => Err(ConfigError::UnknownAlign(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScrollDirection {
    #[default]
    Forward,
    Backward,
}

impl FromStr for ScrollDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Self::Forward),
            "backward" => Ok(Self::Backward),
            other => Err(ConfigError::UnknownDirection(other.to_string())),
        }
    }
}

/// The axis along which the list is windowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Layout {
    #[default]
    Vertical,
    Horizontal,
}

impl FromStr for Layout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            other => Err(ConfigError::UnknownLayout(other.to_string())),
        }
    }
}

/// Cached position of one item along the windowing axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemMetadata {
    /// Distance from the start of the collection.
    pub offset: f64,
    pub size: f64,
}

impl ItemMetadata {
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }
}

/// The indexes a host should render for one frame.
///
/// Both stops are inclusive. An empty collection yields the all-zero range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderRange {
    pub overscan_start: ItemIndex,
    pub overscan_stop: ItemIndex,
    pub visible_start: ItemIndex,
    pub visible_stop: ItemIndex,
}

impl RenderRange {
    pub const EMPTY: Self = Self {
        overscan_start: 0,
        overscan_stop: 0,
        visible_start: 0,
        visible_stop: 0,
    };

    /// Iterates the overscanned indexes. Yields nothing for an empty collection.
    pub fn indices(&self, item_count: usize) -> core::ops::RangeInclusive<ItemIndex> {
        if item_count == 0 {
            #[allow(clippy::reversed_empty_ranges)]
            return 1..=0;
        }
        self.overscan_start..=self.overscan_stop
    }

    pub fn contains_visible(&self, index: ItemIndex) -> bool {
        (self.visible_start..=self.visible_stop).contains(&index)
    }
}

/// A snapshot of the scroll-activity state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: f64,
    pub direction: ScrollDirection,
    pub is_scrolling: bool,
    /// `true` when the latest offset came from `scroll_to`/`scroll_to_item` rather than the user.
    pub was_requested: bool,
}

/// Absolute placement of one rendered item.
///
/// The item is positioned at `start` along the windowing axis and fills the container on the
/// cross axis. When `reversed` is set, the host is expected to mirror the item along the windowing
/// axis (the container is mirrored too, so content reads upright).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStyle {
    pub layout: Layout,
    pub start: f64,
    pub size: f64,
    pub reversed: bool,
}

impl ItemStyle {
    pub fn left(&self) -> f64 {
        match self.layout {
            Layout::Horizontal => self.start,
            Layout::Vertical => 0.0,
        }
    }

    pub fn top(&self) -> f64 {
        match self.layout {
            Layout::Vertical => self.start,
            Layout::Horizontal => 0.0,
        }
    }

    /// `None` means "fill the cross axis".
    pub fn width(&self) -> Option<f64> {
        (self.layout == Layout::Horizontal).then_some(self.size)
    }

    /// `None` means "fill the cross axis".
    pub fn height(&self) -> Option<f64> {
        (self.layout == Layout::Vertical).then_some(self.size)
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        })
    }
}
