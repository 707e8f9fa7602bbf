//! Polar and cartesian helpers.
//!
//! Screen convention: `x` grows to the right, `y` grows downward, so an
//! angle of 0° points right and positive angles turn clockwise.

use std::fmt;
use std::ops::{Add, Sub};

/// A rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f64);

impl Angle {
    pub const fn from_degrees(degrees: f64) -> Self {
        Self(degrees)
    }

    pub fn from_radians(radians: f64) -> Self {
        Self(radians.to_degrees())
    }

    pub const fn degrees(self) -> f64 {
        self.0
    }

    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Linear interpolation between two angles, exact at `t == 0` and `t == 1`.
    pub fn lerp(self, other: Angle, t: f64) -> Angle {
        Angle(self.0 * (1.0 - t) + other.0 * t)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// A point (or offset) in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A `(radius, angle)` pair relative to some circle's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    pub radius: f64,
    pub angle: Angle,
}

impl Polar {
    pub const fn new(radius: f64, angle: Angle) -> Self {
        Self { radius, angle }
    }

    /// Cartesian offset from the circle's center.
    pub fn to_offset(self) -> Point {
        polar_offset(self.radius, self.angle)
    }

    /// Inverse of [`Polar::to_offset`]. The angle lands in (-180°, 180°].
    pub fn from_offset(offset: Point) -> Self {
        Self {
            radius: offset.length(),
            angle: Angle::from_radians(offset.y.atan2(offset.x)),
        }
    }
}

/// `(radius · cos φ, radius · sin φ)`.
pub fn polar_offset(radius: f64, angle: Angle) -> Point {
    let (sin, cos) = angle.radians().sin_cos();
    Point::new(radius * cos, radius * sin)
}
