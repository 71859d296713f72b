//! Four-edge rectangle
//!
//! A [`Rect`] stores its left, top, right and bottom edges directly. Width,
//! height, corners and center are derived.
//!
//! Rectangles are never normalized implicitly: `right < left` or
//! `bottom < top` is a legal transient state. Call [`Rect::normalized`],
//! [`Rect::is_valid`] or [`Rect::is_empty`] before relying on edge order.
//!
//! There are two families of edge mutators and they must not be mixed up:
//!
//! - `set_*` moves a single edge and leaves its partner alone, so the
//!   rectangle is resized.
//! - `move_*` places an edge and shifts its partner by the same delta, so
//!   the rectangle is translated and keeps its size.

use super::{Point, Size};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Rect {
    /// The zero rectangle, also the canonical empty rectangle
    pub const ZERO: Rect = Rect {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// The zero rectangle
    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Create from the four edges
    pub const fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create from the top-left and bottom-right corners
    pub const fn from_points(top_left: Point, bottom_right: Point) -> Self {
        Self::from_edges(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    /// Create from position and dimensions
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_edges(x, y, x + width, y + height)
    }

    /// Create from position and size
    pub fn from_pos_size(pos: Point, size: Size) -> Self {
        Self::from_xywh(pos.x, pos.y, size.width, size.height)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Same as [`Rect::left`]
    pub fn x(&self) -> f64 {
        self.left
    }

    /// Same as [`Rect::top`]
    pub fn y(&self) -> f64 {
        self.top
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right, self.top)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    /// Midpoint, floored
    pub fn center(&self) -> Point {
        Point::new(
            ((self.left + self.right) / 2.0).floor(),
            ((self.top + self.bottom) / 2.0).floor(),
        )
    }

    // =========================================================================
    // Resizing setters (the partner edge stays put)
    // =========================================================================

    pub fn set_left(&mut self, left: f64) {
        self.left = left;
    }

    pub fn set_top(&mut self, top: f64) {
        self.top = top;
    }

    pub fn set_right(&mut self, right: f64) {
        self.right = right;
    }

    pub fn set_bottom(&mut self, bottom: f64) {
        self.bottom = bottom;
    }

    pub fn set_top_left(&mut self, p: Point) {
        self.left = p.x;
        self.top = p.y;
    }

    pub fn set_top_right(&mut self, p: Point) {
        self.right = p.x;
        self.top = p.y;
    }

    pub fn set_bottom_left(&mut self, p: Point) {
        self.left = p.x;
        self.bottom = p.y;
    }

    pub fn set_bottom_right(&mut self, p: Point) {
        self.right = p.x;
        self.bottom = p.y;
    }

    /// Move the right edge so that the width becomes `width`
    pub fn set_width(&mut self, width: f64) {
        self.right = self.left + width;
    }

    /// Move the bottom edge so that the height becomes `height`
    pub fn set_height(&mut self, height: f64) {
        self.bottom = self.top + height;
    }

    pub fn set_size(&mut self, size: Size) {
        self.set_width(size.width);
        self.set_height(size.height);
    }

    // =========================================================================
    // Translating moves (the size is preserved)
    // =========================================================================

    pub fn move_left(&mut self, pos: f64) {
        self.right += pos - self.left;
        self.left = pos;
    }

    pub fn move_top(&mut self, pos: f64) {
        self.bottom += pos - self.top;
        self.top = pos;
    }

    pub fn move_right(&mut self, pos: f64) {
        self.left += pos - self.right;
        self.right = pos;
    }

    pub fn move_bottom(&mut self, pos: f64) {
        self.top += pos - self.bottom;
        self.bottom = pos;
    }

    pub fn move_top_left(&mut self, p: Point) {
        self.move_left(p.x);
        self.move_top(p.y);
    }

    pub fn move_top_right(&mut self, p: Point) {
        self.move_right(p.x);
        self.move_top(p.y);
    }

    pub fn move_bottom_left(&mut self, p: Point) {
        self.move_left(p.x);
        self.move_bottom(p.y);
    }

    pub fn move_bottom_right(&mut self, p: Point) {
        self.move_right(p.x);
        self.move_bottom(p.y);
    }

    pub fn move_center(&mut self, p: Point) {
        let delta = p - self.center();
        self.translate(delta.x, delta.y);
    }

    /// Add deltas to each edge
    pub fn adjust(&mut self, dx1: f64, dy1: f64, dx2: f64, dy2: f64) {
        self.left += dx1;
        self.top += dy1;
        self.right += dx2;
        self.bottom += dy2;
    }

    pub fn adjusted(&self, dx1: f64, dy1: f64, dx2: f64, dy2: f64) -> Rect {
        let mut r = *self;
        r.adjust(dx1, dy1, dx2, dy2);
        r
    }

    /// Shift all four edges
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.adjust(dx, dy, dx, dy);
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Rect {
        self.adjusted(dx, dy, dx, dy)
    }

    /// Swap edges so that `left <= right` and `top <= bottom`
    pub fn normalize(&mut self) {
        if self.right < self.left {
            std::mem::swap(&mut self.left, &mut self.right);
        }
        if self.bottom < self.top {
            std::mem::swap(&mut self.top, &mut self.bottom);
        }
    }

    pub fn normalized(&self) -> Rect {
        let mut r = *self;
        r.normalize();
        r
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    pub fn is_null(&self) -> bool {
        self.left == self.right && self.top == self.bottom
    }

    pub fn is_valid(&self) -> bool {
        self.left < self.right && self.top < self.bottom
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, p: Point) -> bool {
        if self.is_null() {
            return false;
        }
        let r = self.normalized();
        p.x >= r.left && p.x < r.right && p.y >= r.top && p.y < r.bottom
    }

    /// Whether the two rectangles overlap. Null rectangles never do.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        let a = self.normalized();
        let b = other.normalized();
        !(a.left >= b.right || b.left >= a.right || a.top >= b.bottom || b.top >= a.bottom)
    }

    /// Overlapping area, or [`Rect::ZERO`] when there is none
    pub fn intersected(&self, other: &Rect) -> Rect {
        if !self.intersects(other) {
            return Rect::ZERO;
        }
        let a = self.normalized();
        let b = other.normalized();
        Rect::from_edges(
            a.left.max(b.left),
            a.top.max(b.top),
            a.right.min(b.right),
            a.bottom.min(b.bottom),
        )
    }

    /// Bounding rectangle of both. A null operand is ignored.
    pub fn united(&self, other: &Rect) -> Rect {
        if self.is_null() {
            return *other;
        }
        if other.is_null() {
            return *self;
        }
        let a = self.normalized();
        let b = other.normalized();
        Rect::from_edges(
            a.left.min(b.left),
            a.top.min(b.top),
            a.right.max(b.right),
            a.bottom.max(b.bottom),
        )
    }
}
