//! The layout item capability

use crate::math::{Rect, Size};

/// Smallest size the layout core will ever assign
pub const MIN_LAYOUT_SIZE: Size = Size::new(0.0, 0.0);

/// Largest size the layout core will ever assign (2^30 - 1 per axis)
pub const MAX_LAYOUT_SIZE: Size = Size::new(1_073_741_823.0, 1_073_741_823.0);

/// Something layout math can measure and place
///
/// Implementations keep `minimum_size() <= size_hint() <= maximum_size()`
/// and clamp inside [`LayoutItem::set_rect`], so callers cannot push an
/// item out of its bounds by passing an oversized rectangle.
pub trait LayoutItem {
    fn minimum_size(&self) -> Size;

    fn maximum_size(&self) -> Size;

    /// Preferred size, clamped into the item's bounds
    fn size_hint(&self) -> Size;

    /// Current box in layout coordinates
    fn rect(&self) -> Rect;

    /// Place the item. Only the size is clamped, never the position.
    fn set_rect(&mut self, rect: Rect);
}

/// Clamp a leading edge (left or top) against the fixed trailing edge so
/// that the span between them stays within `[min, max]`
pub fn clamp_leading_edge(value: f64, trailing: f64, min: f64, max: f64) -> f64 {
    value.max(trailing - max).min(trailing - min)
}

/// Clamp a trailing edge (right or bottom) against the fixed leading edge
/// so that the span between them stays within `[min, max]`
pub fn clamp_trailing_edge(value: f64, leading: f64, min: f64, max: f64) -> f64 {
    value.min(leading + max).max(leading + min)
}
