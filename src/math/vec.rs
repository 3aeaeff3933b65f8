//! The 2D vector value type
//!
//! Arithmetic follows IEEE-754 without any checks: dividing by zero or
//! normalizing a zero length vector produces infinite or NaN components.
//! Use [`Vector2::try_normalized`] when that is not acceptable.

use super::error::{NormalizeError, ParseVector2Error};
use log::warn;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A point or displacement in 2D space.
///
/// This is a plain `Copy` value, every by-value use is a copy. There is no
/// unary plus in Rust, the identity of a vector is the vector itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    pub const ONE: Vector2 = Vector2 { x: 1.0, y: 1.0 };
    /// Unit vector along the x axis
    pub const X: Vector2 = Vector2 { x: 1.0, y: 0.0 };
    /// Unit vector along the y axis
    pub const Y: Vector2 = Vector2 { x: 0.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Integers are widened to `f32`, values above 2^24 lose precision.
    #[inline]
    pub fn from_ints(x: i32, y: i32) -> Self {
        Self {
            x: x as f32,
            y: y as f32,
        }
    }

    /// Dot product, works as `a.dot(b)` as well as `Vector2::dot(a, b)`
    #[inline]
    pub fn dot(self, other: Vector2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// The 2D cross product (perp dot).
    ///
    /// The magnitude is the area of the parallelogram spanned by both vectors,
    /// the sign is positive when `other` is counter clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Vector2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Overflows to infinity once `x² + y²` exceeds `f32::MAX`, around 1.8e19 per component.
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn magnitude_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn distance(self, other: Vector2) -> f32 {
        (other - self).magnitude()
    }

    /// Returns a copy scaled to unit length, `self` is left untouched.
    ///
    /// A zero length vector results in NaN components.
    pub fn normalized(self) -> Vector2 {
        let mut vec = self;
        vec.normalize();
        vec
    }

    /// Scales this vector in place to unit length and returns it for chaining.
    ///
    /// A zero length vector ends up with NaN components.
    pub fn normalize(&mut self) -> &mut Vector2 {
        let mag = self.magnitude();
        if mag == 0.0 {
            warn!("Normalizing zero length vector, components will be NaN");
        }
        self.x /= mag;
        self.y /= mag;
        self
    }

    /// Checked variant of [`Vector2::normalized`]
    ///
    /// The length is computed with `hypot`, so large finite vectors normalize
    /// where [`Vector2::magnitude`] would overflow.
    pub fn try_normalized(self) -> Result<Vector2, NormalizeError> {
        let mag = self.x.hypot(self.y);
        if mag == 0.0 {
            return Err(NormalizeError::ZeroLength);
        }
        if !mag.is_finite() {
            return Err(NormalizeError::NonFinite);
        }
        Ok(self / mag)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Componentwise comparison with an absolute tolerance
    pub fn abs_diff_eq(self, other: Vector2, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<(i32, i32)> for Vector2 {
    fn from((x, y): (i32, i32)) -> Self {
        Vector2::from_ints(x, y)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    fn from(vec: Vector2) -> Self {
        [vec.x, vec.y]
    }
}

impl From<Vector2> for (f32, f32) {
    fn from(vec: Vector2) -> Self {
        (vec.x, vec.y)
    }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Vector2 {
    type Err = ParseVector2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let x = parts
            .next()
            .filter(|part| !part.trim().is_empty())
            .ok_or(ParseVector2Error::MissingComponent)?;
        let y = parts
            .next()
            .filter(|part| !part.trim().is_empty())
            .ok_or(ParseVector2Error::MissingComponent)?;
        if parts.next().is_some() {
            return Err(ParseVector2Error::TooManyComponents);
        }
        Ok(Vector2 {
            x: x.trim().parse()?,
            y: y.trim().parse()?,
        })
    }
}
