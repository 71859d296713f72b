//! Title-bar style move controller

use super::{GripState, InputResult, PointerEvent, Viewport};
use crate::layout::LayoutItem;
use crate::math::Point;

/// Drags a layout item around, keeping its size
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveGrip {
    state: GripState,
}

impl MoveGrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GripState::Dragging { .. })
    }

    /// Pointer position relative to the target's top-left at drag start
    pub fn offset(&self) -> Point {
        self.state.offset()
    }

    pub fn pointer_down<T: LayoutItem + ?Sized>(
        &mut self,
        event: &PointerEvent,
        target: &T,
    ) -> InputResult {
        if !event.is_primary() {
            return InputResult::Unhandled;
        }
        let offset = event.position - target.rect().top_left();
        self.state = GripState::Dragging { offset };
        tracing::debug!(?offset, "move drag start");
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
        let pointer = viewport.clamp(event.position);
        let mut rect = target.rect();
        rect.move_top_left(pointer - offset);
        tracing::trace!(?rect, "move drag");
        target.set_rect(rect);
        InputResult::Handled
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) -> InputResult {
        if !event.is_primary() || !self.is_dragging() {
            return InputResult::Unhandled;
        }
        self.state = GripState::Idle;
        tracing::debug!("move drag end");
        InputResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::MemoryElement;
    use crate::layout::Geometry;
    use crate::math::{Rect, Size};

    fn target() -> Geometry<MemoryElement> {
        Geometry::with_rect(MemoryElement::new(), Rect::from_xywh(100.0, 100.0, 200.0, 100.0))
    }

    #[test]
    fn test_drag_moves_target() {
        let mut grip = MoveGrip::new();
        let mut g = target();
        let vp = Viewport::new(1000.0, 800.0);

        assert_eq!(grip.pointer_down(&PointerEvent::primary(110.0, 105.0), &g), InputResult::Handled);
        assert_eq!(grip.offset(), Point::new(10.0, 5.0));

        grip.pointer_move(&PointerEvent::primary(310.0, 405.0), &mut g, &vp);
        assert_eq!(g.rect(), Rect::from_xywh(300.0, 400.0, 200.0, 100.0));

        assert_eq!(grip.pointer_up(&PointerEvent::primary(310.0, 405.0)), InputResult::Handled);
        assert!(!grip.is_dragging());
        assert_eq!(grip.offset(), Point::ZERO);
    }

    #[test]
    fn test_pointer_clamped_to_viewport() {
        let mut grip = MoveGrip::new();
        let mut g = target();
        let vp = Viewport::new(1000.0, 800.0);

        grip.pointer_down(&PointerEvent::primary(110.0, 105.0), &g);
        grip.pointer_move(&PointerEvent::primary(-500.0, 5000.0), &mut g, &vp);
        assert_eq!(g.pos(), Point::new(-10.0, 795.0));
        assert_eq!(g.size(), Size::new(200.0, 100.0));
    }

    #[test]
    fn test_secondary_button_ignored() {
        let mut grip = MoveGrip::new();
        let mut g = target();
        let vp = Viewport::new(1000.0, 800.0);

        assert_eq!(grip.pointer_down(&PointerEvent::new(110.0, 105.0, 2), &g), InputResult::Unhandled);
        assert!(!grip.is_dragging());
        assert_eq!(
            grip.pointer_move(&PointerEvent::primary(500.0, 500.0), &mut g, &vp),
            InputResult::Unhandled
        );
        assert_eq!(g.pos(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_secondary_up_does_not_end_drag() {
        let mut grip = MoveGrip::new();
        let g = target();
        grip.pointer_down(&PointerEvent::primary(110.0, 105.0), &g);
        assert_eq!(grip.pointer_up(&PointerEvent::new(0.0, 0.0, 2)), InputResult::Unhandled);
        assert!(grip.is_dragging());
    }
}
