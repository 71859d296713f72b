//! Element-backed components
//!
//! A [`Component`] owns one [`Element`] plus the state the layout core keeps
//! beside it:
//!
//! - the min/max size cache read from computed style
//! - resize listeners fired after the layout core resizes it
//! - extras (disposable resources) released when it is destroyed
//! - its z-index while it is a member of a [`ZStack`](crate::ZStack)
//!
//! The component is the only owner of its size cache. Anything that
//! changes layout-relevant style goes through a component method that
//! invalidates it, or calls [`Component::invalidate_geometry`].

use crate::config::LayoutConfig;
use crate::element::{parse_css_length, write_size_pair, write_z_index, Element, StyleProperty};
use crate::layout::item::{MAX_LAYOUT_SIZE, MIN_LAYOUT_SIZE};
use crate::math::Size;
use crate::stack::Stackable;
use std::cell::{Cell, RefCell};

/// A resource owned by a component and released with it
pub trait Disposable {
    fn dispose(&mut self);
}

impl<F: FnMut()> Disposable for F {
    fn dispose(&mut self) {
        self()
    }
}

/// Cached min/max sizes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeBounds {
    pub minimum: Size,
    pub maximum: Size,
}

type ResizeListener = Box<dyn FnMut(Size)>;

/// An element with layout state attached
pub struct Component<E: Element> {
    element: E,
    layout_bounds: SizeBounds,
    bounds_cache: Cell<Option<SizeBounds>>,
    resize_listeners: RefCell<Vec<ResizeListener>>,
    extras: RefCell<Vec<Box<dyn Disposable>>>,
    z_index: Cell<Option<u32>>,
    destroyed: Cell<bool>,
}

impl<E: Element> Component<E> {
    /// Wrap an element using the default layout bounds
    pub fn new(element: E) -> Self {
        Self::with_layout_bounds(element, MIN_LAYOUT_SIZE, MAX_LAYOUT_SIZE)
    }

    /// Wrap an element using the configured layout bounds
    pub fn with_config(element: E, config: &LayoutConfig) -> Self {
        Self::with_layout_bounds(element, config.min_layout_size, config.max_layout_size)
    }

    fn with_layout_bounds(element: E, minimum: Size, maximum: Size) -> Self {
        Self {
            element,
            layout_bounds: SizeBounds { minimum, maximum },
            bounds_cache: Cell::new(None),
            resize_listeners: RefCell::new(Vec::new()),
            extras: RefCell::new(Vec::new()),
            z_index: Cell::new(None),
            destroyed: Cell::new(false),
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    // =========================================================================
    // Size bounds
    // =========================================================================

    /// Min/max size from computed style, cached until invalidated
    pub fn size_bounds(&self) -> SizeBounds {
        if let Some(bounds) = self.bounds_cache.get() {
            return bounds;
        }
        let bounds = self.read_size_bounds();
        self.bounds_cache.set(Some(bounds));
        bounds
    }

    fn read_size_bounds(&self) -> SizeBounds {
        let SizeBounds {
            minimum: floor,
            maximum: ceiling,
        } = self.layout_bounds;
        let minimum = Size::new(
            self.style_length(StyleProperty::MinWidth, floor.width),
            self.style_length(StyleProperty::MinHeight, floor.height),
        );
        let maximum = Size::new(
            self.style_length(StyleProperty::MaxWidth, ceiling.width),
            self.style_length(StyleProperty::MaxHeight, ceiling.height),
        );
        tracing::debug!(?minimum, ?maximum, "size bounds read from computed style");
        SizeBounds {
            minimum: minimum.clamped(floor, ceiling),
            maximum: maximum.clamped(floor, ceiling),
        }
    }

    fn style_length(&self, property: StyleProperty, fallback: f64) -> f64 {
        self.element
            .computed_style(property)
            .and_then(|value| parse_css_length(&value).ok())
            .unwrap_or(fallback)
    }

    /// Drop the cached size bounds
    pub fn invalidate_geometry(&self) {
        if self.bounds_cache.take().is_some() {
            tracing::debug!("size bounds invalidated");
        }
    }

    /// Write `min-width`/`min-height`. An invalid size clears them.
    pub fn set_minimum_size(&self, size: Size) {
        write_size_pair(
            &self.element,
            StyleProperty::MinWidth,
            StyleProperty::MinHeight,
            size,
        );
        self.invalidate_geometry();
    }

    /// Write `max-width`/`max-height`. An invalid size clears them.
    pub fn set_maximum_size(&self, size: Size) {
        write_size_pair(
            &self.element,
            StyleProperty::MaxWidth,
            StyleProperty::MaxHeight,
            size,
        );
        self.invalidate_geometry();
    }

    // =========================================================================
    // Resize notification
    // =========================================================================

    /// Register a listener called with the new size after each resize.
    /// Ignored once the component is destroyed.
    pub fn on_resize(&self, listener: impl FnMut(Size) + 'static) {
        if self.destroyed.get() {
            return;
        }
        self.resize_listeners.borrow_mut().push(Box::new(listener));
    }

    /// Run the resize listeners
    pub fn notify_resized(&self, size: Size) {
        // Listeners may register more listeners, or destroy the component
        let mut listeners = std::mem::take(&mut *self.resize_listeners.borrow_mut());
        for listener in listeners.iter_mut() {
            listener(size);
            if self.destroyed.get() {
                return;
            }
        }
        let mut slot = self.resize_listeners.borrow_mut();
        listeners.append(&mut slot);
        *slot = listeners;
    }

    // =========================================================================
    // Owned extras
    // =========================================================================

    /// Hand a resource to the component; it is disposed on destroy
    pub fn own(&self, extra: impl Disposable + 'static) {
        self.extras.borrow_mut().push(Box::new(extra));
    }

    /// Dispose extras in reverse registration order. Runs once.
    pub fn destroy(&self) {
        if self.destroyed.replace(true) {
            return;
        }
        let mut extras = std::mem::take(&mut *self.extras.borrow_mut());
        tracing::debug!(count = extras.len(), "destroying component");
        while let Some(mut extra) = extras.pop() {
            extra.dispose();
        }
        self.resize_listeners.borrow_mut().clear();
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.get()
    }

    /// Z-index while stacked
    pub fn z_index(&self) -> Option<u32> {
        self.z_index.get()
    }
}

impl<E: Element> Drop for Component<E> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<E: Element> Stackable for Component<E> {
    fn is_same(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }

    fn apply_z_index(&self, index: Option<u32>) {
        self.z_index.set(index);
        write_z_index(&self.element, index);
    }
}

impl<E: Element + std::fmt::Debug> std::fmt::Debug for Component<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Component")
            .field("element", &self.element)
            .field("bounds_cache", &self.bounds_cache.get())
            .field("z_index", &self.z_index.get())
            .field("destroyed", &self.destroyed.get())
            .finish_non_exhaustive()
    }
}
