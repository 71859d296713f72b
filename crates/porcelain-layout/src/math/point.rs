//! 2D point type

use serde::{Deserialize, Serialize};

/// A position in layout space.
///
/// Coordinates are pixel values but kept as `f64` so that division by zero
/// follows IEEE-754 instead of panicking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Origin
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are zero
    pub fn is_null(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Sum of the absolute coordinates
    pub fn manhattan_length(self) -> f64 {
        self.x.abs() + self.y.abs()
    }

    /// Scale both coordinates, flooring the result
    pub fn multiplied(self, factor: f64) -> Point {
        Point::new((self.x * factor).floor(), (self.y * factor).floor())
    }

    /// Divide both coordinates, flooring the result
    pub fn divided(self, divisor: f64) -> Point {
        Point::new((self.x / divisor).floor(), (self.y / divisor).floor())
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Point;
    fn mul(self, factor: f64) -> Point {
        self.multiplied(factor)
    }
}

impl std::ops::Div<f64> for Point {
    type Output = Point;
    fn div(self, divisor: f64) -> Point {
        self.divided(divisor)
    }
}
