use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::ParseFloatError;

/// Returned by [`Vector2::try_normalized`](super::Vector2::try_normalized)
/// when the vector has no direction that can be scaled to unit length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeError {
    /// Both components are zero.
    ZeroLength,
    /// A component is NaN or infinite, or the length itself overflows `f32`.
    NonFinite,
}

impl Error for NormalizeError {}

impl Display for NormalizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizeError::ZeroLength => write!(f, "can not normalize a zero length vector"),
            NormalizeError::NonFinite => {
                write!(f, "can not normalize a vector with a non-finite magnitude")
            }
        }
    }
}

/// Returned when parsing a vector from its `x,y` text form fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseVector2Error {
    /// The `x` or `y` part is absent or blank.
    MissingComponent,
    /// More than one comma separator.
    TooManyComponents,
    /// A component is not a valid `f32`.
    InvalidFloat(ParseFloatError),
}

impl Error for ParseVector2Error {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseVector2Error::InvalidFloat(error) => Some(error),
            _ => None,
        }
    }
}

impl Display for ParseVector2Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseVector2Error::MissingComponent => {
                write!(f, "Invalid vector format, expected x,y")
            }
            ParseVector2Error::TooManyComponents => {
                write!(f, "Invalid vector format, expected exactly two components")
            }
            ParseVector2Error::InvalidFloat(error) => write!(f, "Invalid component: {error}"),
        }
    }
}

impl From<ParseFloatError> for ParseVector2Error {
    fn from(error: ParseFloatError) -> Self {
        ParseVector2Error::InvalidFloat(error)
    }
}
