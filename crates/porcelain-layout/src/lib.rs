//! Procedural layout for the Porcelain widget toolkit
//!
//! This crate positions and sizes widgets without relying on CSS flow
//! layout:
//! - Geometry value types (point, size, four-edge rectangle)
//! - Layout items bridging an element to layout math, with clamped bounds
//! - Absolute positioning with min/max size enforcement
//! - Z-order stacks for window tiers
//! - Move and resize grips driven by pointer events
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: `Point`, `Size`, `Rect`
//! - [`element`]: the `Element` bridge to the visual layer
//! - [`layout`]: `LayoutItem`, `Component`, `ComponentItem`, `Geometry`
//! - [`stack`]: `ZStack` and the tiered `StackRegistry`
//! - [`grip`]: `MoveGrip`, `SizeGrip` and pointer types
//! - [`config`]: JSON-loadable settings
//!
//! ```text
//!  grip ──▶ LayoutItem ◀── ComponentItem ──▶ Component ──┐
//!                  ▲                                      ├──▶ Element
//!                  └────── Geometry ──────────────────────┘
//!  StackRegistry ──▶ ZStack ──▶ Stackable (Component writes z-index)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use porcelain_layout::{
//!     Component, ComponentItem, LayoutItem, MemoryElement, Rect, Size, StackRegistry, StackTier,
//! };
//! use std::rc::Rc;
//!
//! let window = Rc::new(Component::new(MemoryElement::new()));
//! window.set_minimum_size(Size::new(200.0, 100.0));
//!
//! let mut stacks = StackRegistry::new();
//! stacks.add(Rc::clone(&window), StackTier::Normal);
//! assert_eq!(window.z_index(), Some(10000));
//!
//! ComponentItem::new(&window).set_rect(Rect::from_xywh(40.0, 40.0, 50.0, 50.0));
//! assert_eq!(ComponentItem::new(&window).rect().size(), Size::new(200.0, 100.0));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Clamp, don't throw**: layout math has no error paths; sizes are
//!    clamped and rectangles may be denormalized
//! 2. **Pure Rust core**: everything is testable without a browser; the
//!    DOM bridge sits behind the `wasm` feature
//! 3. **Single-threaded**: handles use `Rc` and `Cell`, like the UI thread
//!    they run on

pub mod config;
pub mod element;
pub mod error;
pub mod grip;
pub mod layout;
pub mod math;
pub mod stack;

// Re-export core types for convenience
pub use config::{LayoutConfig, StackBases};
#[cfg(feature = "wasm")]
pub use element::DomElement;
pub use element::{Element, MemoryElement, StyleProperty};
pub use error::{LayoutError, LayoutResult};
pub use grip::{
    GripArea, InputResult, MoveGrip, PointerButton, PointerEvent, SizeGrip, Viewport,
};
pub use layout::{
    Component, ComponentItem, Disposable, Geometry, LayoutItem, SizeBounds, MAX_LAYOUT_SIZE,
    MIN_LAYOUT_SIZE,
};
pub use math::{Point, Rect, Size};
pub use stack::{StackRegistry, StackTier, Stackable, ZStack};
