//!
//! Vector2 is a small library providing a 2D single precision vector.
//!
//! It provides the usual arithmetic operators, dot and cross products, magnitude and normalization.
//!
//! Numeric edge cases are not guarded: division by zero and normalizing a zero length vector
//! produce infinite or NaN components, like plain `f32` arithmetic does.
//! [`Vector2::try_normalized`] is the checked alternative.
//!
//! ```
//! use vector2::Vector2;
//!
//! let a = Vector2::new(1.0, 2.0);
//! let b = Vector2::new(3.0, 4.0);
//! assert_eq!(a + b, Vector2::new(4.0, 6.0));
//! assert_eq!(a.dot(b), 11.0);
//! assert_eq!(a.cross(b), -2.0);
//! assert_eq!(b.magnitude(), 5.0);
//! ```

pub mod math;

pub use math::{NormalizeError, ParseVector2Error, Vector2};
