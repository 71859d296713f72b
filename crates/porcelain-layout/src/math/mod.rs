//! Core geometry types
//!
//! Value types for positions, sizes and rectangles in layout space.

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
