use alloc::string::String;

use thiserror::Error;

/// Rejected engine configuration.
///
/// The engine refuses to start from an ambiguous configuration instead of guessing a default.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("no item size configured: set a fixed size or a size function")]
    MissingItemSize,

    #[error("fixed item size must be finite and non-negative, got {0}")]
    InvalidFixedItemSize(f64),

    #[error("estimated item size must be finite and non-negative, got {0}")]
    InvalidEstimatedItemSize(f64),

    #[error("viewport size must be finite and non-negative, got {0}")]
    InvalidViewportSize(f64),

    #[error("unknown alignment `{0}` (expected auto, start, center or end)")]
    UnknownAlign(String),

    #[error("unknown layout `{0}` (expected vertical or horizontal)")]
    UnknownLayout(String),

    #[error("unknown scroll direction `{0}` (expected forward or backward)")]
    UnknownDirection(String),

    #[error("saved metadata is not contiguous at index {index}")]
    SavedStateMismatch { index: usize },
}

pub(crate) fn is_valid_extent(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
