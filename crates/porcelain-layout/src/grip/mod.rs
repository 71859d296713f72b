//! Pointer-drag controllers
//!
//! Grips move or resize a [`LayoutItem`](crate::LayoutItem) while the
//! primary button is held:
//!
//! ```text
//!   Idle ──(primary down)──▶ Dragging { offset } ──(primary up)──▶ Idle
//!                               │   ▲
//!                               └───┘ pointer move: clamp pointer to the
//!                                     viewport, compute rect, set_rect
//! ```
//!
//! The offset between the pointer and the dragged edge or corner is the
//! only state kept between events. Other buttons are ignored.

mod area;
mod move_grip;
mod size_grip;

pub use area::GripArea;
pub use move_grip::MoveGrip;
pub use size_grip::SizeGrip;

use crate::math::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Mouse button of a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u8),
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => PointerButton::Primary,
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }
}

/// A pointer event in viewport coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64, button: u8) -> Self {
        Self {
            position: Point::new(x, y),
            button: PointerButton::from_code(button),
        }
    }

    /// Primary-button event at a position
    pub fn primary(x: f64, y: f64) -> Self {
        Self::new(x, y, 0)
    }

    pub fn is_primary(&self) -> bool {
        self.button == PointerButton::Primary
    }
}

/// Result of feeding an event to a grip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// The grip consumed the event
    Handled,
    /// The event was not for this grip
    Unhandled,
}

/// Visible area of the page
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_xywh(0.0, 0.0, self.width, self.height)
    }

    /// Pull a point inside the viewport, edges included
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.min(self.width).max(0.0), p.y.min(self.height).max(0.0))
    }
}

/// Drag state shared by the grips
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum GripState {
    #[default]
    Idle,
    Dragging {
        offset: Point,
    },
}

impl GripState {
    fn offset(&self) -> Point {
        match self {
            GripState::Idle => Point::ZERO,
            GripState::Dragging { offset } => *offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_button_codes() {
        assert_eq!(PointerButton::from_code(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_code(1), PointerButton::Middle);
        assert_eq!(PointerButton::from_code(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_code(4), PointerButton::Other(4));
        assert!(PointerEvent::primary(1.0, 1.0).is_primary());
        assert!(!PointerEvent::new(1.0, 1.0, 2).is_primary());
    }

    #[test]
    fn test_viewport_clamp() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.clamp(Point::new(-10.0, 700.0)), Point::new(0.0, 600.0));
        assert_eq!(vp.clamp(Point::new(400.0, 300.0)), Point::new(400.0, 300.0));
        assert_eq!(vp.rect(), Rect::from_edges(0.0, 0.0, 800.0, 600.0));
    }
}
