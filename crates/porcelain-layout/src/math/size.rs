//! 2D size type

use serde::{Deserialize, Serialize};

/// Width and height of a box.
///
/// Negative dimensions are representable; [`Size::INVALID`] is the
/// conventional "unset, use the default" marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Unset size
    pub const INVALID: Size = Size {
        width: -1.0,
        height: -1.0,
    };

    /// Create a new size
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Either dimension is zero
    pub fn is_empty(self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Both dimensions are zero
    pub fn is_null(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Neither dimension is negative
    pub fn is_valid(self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }

    /// Component-wise minimum
    pub fn bounded_to(self, other: Size) -> Size {
        Size::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Component-wise maximum
    pub fn expanded_to(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Clamp into `[min, max]` per axis.
    ///
    /// The maximum is applied first, so `min` wins when the bounds cross.
    pub fn clamped(self, min: Size, max: Size) -> Size {
        self.bounded_to(max).expanded_to(min)
    }

    /// Swap width and height in place
    pub fn transpose(&mut self) {
        std::mem::swap(&mut self.width, &mut self.height);
    }

    /// Size with width and height swapped
    pub fn transposed(self) -> Size {
        Size::new(self.height, self.width)
    }

    /// Scale both dimensions, flooring the result
    pub fn multiplied(self, factor: f64) -> Size {
        Size::new((self.width * factor).floor(), (self.height * factor).floor())
    }

    /// Divide both dimensions, flooring the result
    pub fn divided(self, divisor: f64) -> Size {
        Size::new((self.width / divisor).floor(), (self.height / divisor).floor())
    }
}

impl std::ops::Add for Size {
    type Output = Size;
    fn add(self, other: Size) -> Size {
        Size::new(self.width + other.width, self.height + other.height)
    }
}

impl std::ops::Sub for Size {
    type Output = Size;
    fn sub(self, other: Size) -> Size {
        Size::new(self.width - other.width, self.height - other.height)
    }
}

impl std::ops::Mul<f64> for Size {
    type Output = Size;
    fn mul(self, factor: f64) -> Size {
        self.multiplied(factor)
    }
}

impl std::ops::Div<f64> for Size {
    type Output = Size;
    fn div(self, divisor: f64) -> Size {
        self.divided(divisor)
    }
}
