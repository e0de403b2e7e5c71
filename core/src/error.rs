use std::fmt;

use thiserror::Error;

/// Names the side of a rectangle that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Width => write!(f, "width"),
            Dimension::Height => write!(f, "height"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RectangleError {
    /// A width or height was zero or negative.
    #[error("{dimension} must be positive, not {value}")]
    InvalidDimension { dimension: Dimension, value: i64 },

    /// An operation expecting a rectangle received something else.
    /// A side derived by combine or difference does not fit in an `i64`.
    #[error("{dimension} is too large, got {value}")]
    DimensionOverflow { dimension: Dimension, value: i128 },

    #[error("operand must be a Rectangle, got {found}")]
    TypeMismatch { found: &'static str },

    #[error("cannot read a rectangle from '{input}'")]
    Malformed { input: String },
}

impl RectangleError {
    pub fn invalid_dimension(dimension: Dimension, value: i64) -> Self {
        Self::InvalidDimension { dimension, value }
    }

    pub fn malformed(input: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.into(),
        }
    }
}
