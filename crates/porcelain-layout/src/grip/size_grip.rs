//! Edge and corner resize controller

use super::{GripArea, GripState, InputResult, PointerEvent, Viewport};
use crate::layout::{clamp_leading_edge, clamp_trailing_edge, LayoutItem};
use crate::math::{Point, Rect};

/// Resizes a layout item by dragging one edge or corner
///
/// The opposite edges stay fixed. The dragged edges are clamped so the
/// target stays within its minimum and maximum size.
#[derive(Clone, Copy, Debug)]
pub struct SizeGrip {
    area: GripArea,
    state: GripState,
}

impl SizeGrip {
    pub fn new(area: GripArea) -> Self {
        Self {
            area,
            state: GripState::Idle,
        }
    }

    pub fn area(&self) -> GripArea {
        self.area
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GripState::Dragging { .. })
    }

    /// Pointer position relative to the dragged edges at drag start
    pub fn offset(&self) -> Point {
        self.state.offset()
    }

    /// The point the pointer is tracking: the dragged edge on each moving
    /// axis, the pointer itself on a fixed axis
    fn anchor(&self, rect: &Rect, pointer: Point) -> Point {
        let x = if self.area.moves_left() {
            rect.left()
        } else if self.area.moves_right() {
            rect.right()
        } else {
            pointer.x
        };
        let y = if self.area.moves_top() {
            rect.top()
        } else if self.area.moves_bottom() {
            rect.bottom()
        } else {
            pointer.y
        };
        Point::new(x, y)
    }

    pub fn pointer_down<T: LayoutItem + ?Sized>(
        &mut self,
        event: &PointerEvent,
        target: &T,
    ) -> InputResult {
        if !event.is_primary() {
            return InputResult::Unhandled;
        }
        let offset = event.position - self.anchor(&target.rect(), event.position);
        self.state = GripState::Dragging { offset };
        tracing::debug!(area = self.area.id(), ?offset, "resize drag start");
        InputResult::Handled
    }

    pub fn pointer_move<T: LayoutItem + ?Sized>(
        &mut self,
        event: &PointerEvent,
        target: &mut T,
        viewport: &Viewport,
    ) -> InputResult {
        let GripState::Dragging { offset } = self.state else {
            return InputResult::Unhandled;
        };
        let edge = viewport.clamp(event.position) - offset;
        let min = target.minimum_size();
        let max = target.maximum_size();
        let mut rect = target.rect();

        if self.area.moves_left() {
            let right = rect.right();
            rect.set_left(clamp_leading_edge(edge.x, right, min.width, max.width));
        } else if self.area.moves_right() {
            let left = rect.left();
            rect.set_right(clamp_trailing_edge(edge.x, left, min.width, max.width));
        }
        if self.area.moves_top() {
            let bottom = rect.bottom();
            rect.set_top(clamp_leading_edge(edge.y, bottom, min.height, max.height));
        } else if self.area.moves_bottom() {
            let top = rect.top();
            rect.set_bottom(clamp_trailing_edge(edge.y, top, min.height, max.height));
        }

        tracing::trace!(area = self.area.id(), ?rect, "resize drag");
        target.set_rect(rect);
        InputResult::Handled
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) -> InputResult {
        if !event.is_primary() || !self.is_dragging() {
            return InputResult::Unhandled;
        }
        self.state = GripState::Idle;
        tracing::debug!(area = self.area.id(), "resize drag end");
        InputResult::Handled
    }
}
