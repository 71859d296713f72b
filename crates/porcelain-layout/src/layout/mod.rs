//! Layout items
//!
//! Two ways of giving layout math something to measure and place:
//!
//! - [`ComponentItem`]: reads bounds and the box back from a [`Component`]'s
//!   element, with the bounds cached on the component
//! - [`Geometry`]: owns its rectangle and bounds, pushing every change to
//!   the element without reading it back
//!
//! Both implement [`LayoutItem`], which is what the grips work against.

mod component;
mod component_item;
mod geometry;
mod item;

pub use component::{Component, Disposable, SizeBounds};
pub use component_item::ComponentItem;
pub use geometry::Geometry;
pub use item::{
    clamp_leading_edge, clamp_trailing_edge, LayoutItem, MAX_LAYOUT_SIZE, MIN_LAYOUT_SIZE,
};
