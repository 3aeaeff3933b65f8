//! 2D vector math
//!
//! This module provides:
//! - The [`Vector2`] value type (vec submodule)
//! - Its operator overloads (ops submodule)
//! - The errors returned by the checked operations (error submodule)

mod error;
mod ops;
mod vec;

pub use error::*;
pub use vec::*;
