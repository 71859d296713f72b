//! Absolute positioning helper
//!
//! [`Geometry`] owns its rectangle and size bounds instead of reading them
//! back from the element. Every mutator clamps against the current bounds,
//! updates the stored rectangle and immediately writes left/top/width/height
//! to the element.
//!
//! Edge setters resize: the opposite edge stays fixed and the moved edge is
//! clamped so that the span stays within `[minimum_size, maximum_size]`.
//! Whole-size setters clamp width and height and leave the position alone.
//!
//! Resize listeners run after every setter that writes a size, whether or
//! not the size changed. [`Geometry::set_pos`] only moves and never
//! notifies.

use super::item::{
    clamp_leading_edge, clamp_trailing_edge, LayoutItem, MAX_LAYOUT_SIZE, MIN_LAYOUT_SIZE,
};
use crate::element::{write_rect, Element};
use crate::math::{Point, Rect, Size};

type ResizeListener = Box<dyn FnMut(Size)>;

/// Element positioned from an owned rectangle
pub struct Geometry<E: Element> {
    element: E,
    rect: Rect,
    minimum: Size,
    maximum: Size,
    resize_listeners: Vec<ResizeListener>,
}

impl<E: Element> Geometry<E> {
    /// Bind to an element. Nothing is written until the first mutation.
    pub fn new(element: E) -> Self {
        Self {
            element,
            rect: Rect::ZERO,
            minimum: MIN_LAYOUT_SIZE,
            maximum: MAX_LAYOUT_SIZE,
            resize_listeners: Vec::new(),
        }
    }

    /// Bind to an element and place it
    pub fn with_rect(element: E, rect: Rect) -> Self {
        let mut geometry = Self::new(element);
        geometry.set_rect(rect);
        geometry
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    /// Register a listener called with the new size after each resize
    pub fn on_resize(&mut self, listener: impl FnMut(Size) + 'static) {
        self.resize_listeners.push(Box::new(listener));
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn left(&self) -> f64 {
        self.rect.left()
    }

    pub fn top(&self) -> f64 {
        self.rect.top()
    }

    pub fn right(&self) -> f64 {
        self.rect.right()
    }

    pub fn bottom(&self) -> f64 {
        self.rect.bottom()
    }

    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    pub fn pos(&self) -> Point {
        self.rect.top_left()
    }

    pub fn size(&self) -> Size {
        self.rect.size()
    }

    // =========================================================================
    // Edges and corners
    // =========================================================================

    pub fn set_left(&mut self, left: f64) {
        self.update(|g| g.clamp_left(left));
    }

    pub fn set_top(&mut self, top: f64) {
        self.update(|g| g.clamp_top(top));
    }

    pub fn set_right(&mut self, right: f64) {
        self.update(|g| g.clamp_right(right));
    }

    pub fn set_bottom(&mut self, bottom: f64) {
        self.update(|g| g.clamp_bottom(bottom));
    }

    pub fn set_top_left(&mut self, p: Point) {
        self.update(|g| {
            g.clamp_left(p.x);
            g.clamp_top(p.y);
        });
    }

    pub fn set_top_right(&mut self, p: Point) {
        self.update(|g| {
            g.clamp_right(p.x);
            g.clamp_top(p.y);
        });
    }

    pub fn set_bottom_left(&mut self, p: Point) {
        self.update(|g| {
            g.clamp_left(p.x);
            g.clamp_bottom(p.y);
        });
    }

    pub fn set_bottom_right(&mut self, p: Point) {
        self.update(|g| {
            g.clamp_right(p.x);
            g.clamp_bottom(p.y);
        });
    }

    /// Move without resizing. Position is never clamped.
    pub fn set_pos(&mut self, p: Point) {
        self.rect.move_top_left(p);
        self.sync();
    }

    // =========================================================================
    // Sizes
    // =========================================================================

    pub fn set_width(&mut self, width: f64) {
        let width = width.min(self.maximum.width).max(self.minimum.width);
        self.update(|g| g.rect.set_width(width));
    }

    pub fn set_height(&mut self, height: f64) {
        let height = height.min(self.maximum.height).max(self.minimum.height);
        self.update(|g| g.rect.set_height(height));
    }

    pub fn set_size(&mut self, size: Size) {
        let size = size.clamped(self.minimum, self.maximum);
        self.update(|g| g.rect.set_size(size));
    }

    /// Change the minimum size; a live rect that is now too small grows.
    /// An invalid size restores [`MIN_LAYOUT_SIZE`].
    pub fn set_minimum_size(&mut self, size: Size) {
        self.minimum = if size.is_valid() { size } else { MIN_LAYOUT_SIZE };
        self.reclamp();
    }

    /// Change the maximum size; a live rect that is now too large shrinks.
    /// An invalid size restores [`MAX_LAYOUT_SIZE`].
    pub fn set_maximum_size(&mut self, size: Size) {
        self.maximum = if size.is_valid() { size } else { MAX_LAYOUT_SIZE };
        self.reclamp();
    }

    fn reclamp(&mut self) {
        let size = self.rect.size().clamped(self.minimum, self.maximum);
        if size != self.rect.size() {
            self.update(|g| g.rect.set_size(size));
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn clamp_left(&mut self, left: f64) {
        let right = self.rect.right();
        self.rect.set_left(clamp_leading_edge(
            left,
            right,
            self.minimum.width,
            self.maximum.width,
        ));
    }

    fn clamp_top(&mut self, top: f64) {
        let bottom = self.rect.bottom();
        self.rect.set_top(clamp_leading_edge(
            top,
            bottom,
            self.minimum.height,
            self.maximum.height,
        ));
    }

    fn clamp_right(&mut self, right: f64) {
        let left = self.rect.left();
        self.rect.set_right(clamp_trailing_edge(
            right,
            left,
            self.minimum.width,
            self.maximum.width,
        ));
    }

    fn clamp_bottom(&mut self, bottom: f64) {
        let top = self.rect.top();
        self.rect.set_bottom(clamp_trailing_edge(
            bottom,
            top,
            self.minimum.height,
            self.maximum.height,
        ));
    }

    /// Apply a sizing change to the rect, sync the element and notify
    fn update(&mut self, change: impl FnOnce(&mut Self)) {
        change(self);
        self.sync();
        let size = self.rect.size();
        for listener in self.resize_listeners.iter_mut() {
            listener(size);
        }
    }

    fn sync(&self) {
        tracing::trace!(rect = ?self.rect, "geometry sync");
        write_rect(&self.element, self.rect);
    }
}

impl<E: Element> LayoutItem for Geometry<E> {
    fn minimum_size(&self) -> Size {
        self.minimum
    }

    fn maximum_size(&self) -> Size {
        self.maximum
    }

    fn size_hint(&self) -> Size {
        self.element
            .intrinsic_size()
            .clamped(self.minimum, self.maximum)
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        let size = rect.size().clamped(self.minimum, self.maximum);
        self.update(|g| g.rect = Rect::from_pos_size(rect.top_left(), size));
    }
}
