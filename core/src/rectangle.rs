//! # Rectangle Model
//!
//! A rectangle with strictly positive integer sides.
//!
//! Rectangles are ordered and compared by **area** only, so two rectangles of
//! different shape but equal area are equal. Two rectangles can also be
//! combined into a new one ([`Rectangle::combine`]) or subtracted from one
//! another ([`Rectangle::difference`]); both derive the new height from the
//! summed or subtracted perimeters and validate it like any other height.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{Dimension, RectangleError};
use crate::logging::{logged, traced};
use crate::operand::{Operand, expect_rectangle};

#[derive(Clone, Copy)]
pub struct Rectangle {
    width: i64,
    height: i64,
}

/// Rejects zero and negative sides.
fn positive(dimension: Dimension, value: i64) -> Result<i64, RectangleError> {
    if value <= 0 {
        return Err(RectangleError::invalid_dimension(dimension, value));
    }
    Ok(value)
}

/// Narrows a side derived from widened arithmetic back to a storable side.
fn derived(dimension: Dimension, value: i128) -> Result<i64, RectangleError> {
    i64::try_from(value).map_err(|_| RectangleError::DimensionOverflow { dimension, value })
}

impl Rectangle {
    /// Creates a rectangle, or a square when `height` is `None`.
    pub fn new(width: i64, height: Option<i64>) -> Result<Self, RectangleError> {
        logged("Rectangle::new", &[&width, &height], || {
            let width = positive(Dimension::Width, width)?;
            let height = positive(Dimension::Height, height.unwrap_or(width))?;
            Ok(Self { width, height })
        })
    }

    pub fn square(side: i64) -> Result<Self, RectangleError> {
        Self::new(side, None)
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// Replaces the width. On failure the previous width is kept.
    pub fn set_width(&mut self, width: i64) -> Result<(), RectangleError> {
        let before = *self;
        logged("Rectangle::set_width", &[&before, &width], || {
            self.width = positive(Dimension::Width, width)?;
            Ok(())
        })
    }

    /// Replaces the height. On failure the previous height is kept.
    pub fn set_height(&mut self, height: i64) -> Result<(), RectangleError> {
        let before = *self;
        logged("Rectangle::set_height", &[&before, &height], || {
            self.height = positive(Dimension::Height, height)?;
            Ok(())
        })
    }

    /// Measures are widened to `i128`, which holds them for any pair of sides.
    pub fn perimeter(&self) -> i128 {
        traced("Rectangle::perimeter", &[self], || {
            2 * (i128::from(self.width) + i128::from(self.height))
        })
    }

    pub fn area(&self) -> i128 {
        traced("Rectangle::area", &[self], || {
            i128::from(self.width) * i128::from(self.height)
        })
    }

    /// Adds two rectangles: widths and perimeters are summed and the height
    /// is whatever the summed perimeter leaves over.
    pub fn combine<O>(&self, other: &O) -> Result<Rectangle, RectangleError>
    where
        O: Operand + ?Sized,
    {
        logged("Rectangle::combine", &[self, &other], || {
            let other = expect_rectangle(other)?;

            let width = i128::from(self.width) + i128::from(other.width);
            let perimeter = self.perimeter() + other.perimeter();
            let height = perimeter.div_euclid(2) - width;

            Rectangle::new(
                derived(Dimension::Width, width)?,
                Some(derived(Dimension::Height, height)?),
            )
        })
    }

    /// Subtracts the rectangle with the smaller perimeter from the one with
    /// the larger perimeter, whichever side of the call each one is on.
    ///
    /// The derived height is not clamped: operands whose difference leaves
    /// no positive height fail with [`RectangleError::InvalidDimension`].
    pub fn difference<O>(&self, other: &O) -> Result<Rectangle, RectangleError>
    where
        O: Operand + ?Sized,
    {
        logged("Rectangle::difference", &[self, &other], || {
            let other = expect_rectangle(other)?;

            let (larger, smaller) = if self.perimeter() < other.perimeter() {
                (other, self)
            } else {
                (self, other)
            };

            let width = (i128::from(larger.width) - i128::from(smaller.width)).abs();
            let perimeter = larger.perimeter() - smaller.perimeter();
            let height = perimeter.div_euclid(2) - width;

            Rectangle::new(
                derived(Dimension::Width, width)?,
                Some(derived(Dimension::Height, height)?),
            )
        })
    }

    pub fn less_than<O>(&self, other: &O) -> Result<bool, RectangleError>
    where
        O: Operand + ?Sized,
    {
        logged("Rectangle::less_than", &[self, &other], || {
            let other = expect_rectangle(other)?;
            Ok(self.area() < other.area())
        })
    }

    /// Equality by area, not by matching sides.
    pub fn equals<O>(&self, other: &O) -> Result<bool, RectangleError>
    where
        O: Operand + ?Sized,
    {
        logged("Rectangle::equals", &[self, &other], || {
            let other = expect_rectangle(other)?;
            Ok(self.area() == other.area())
        })
    }

    pub fn less_or_equal<O>(&self, other: &O) -> Result<bool, RectangleError>
    where
        O: Operand + ?Sized,
    {
        logged("Rectangle::less_or_equal", &[self, &other], || {
            let other = expect_rectangle(other)?;
            Ok(self.area() <= other.area())
        })
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.area() == other.area()
    }
}

impl PartialOrd for Rectangle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.area().cmp(&other.area()))
    }
}

impl Add for Rectangle {
    type Output = Result<Rectangle, RectangleError>;

    fn add(self, rhs: Rectangle) -> Self::Output {
        self.combine(&rhs)
    }
}

impl Add for &Rectangle {
    type Output = Result<Rectangle, RectangleError>;

    fn add(self, rhs: &Rectangle) -> Self::Output {
        self.combine(rhs)
    }
}

impl Sub for Rectangle {
    type Output = Result<Rectangle, RectangleError>;

    fn sub(self, rhs: Rectangle) -> Self::Output {
        self.difference(&rhs)
    }
}

impl Sub for &Rectangle {
    type Output = Result<Rectangle, RectangleError>;

    fn sub(self, rhs: &Rectangle) -> Self::Output {
        self.difference(rhs)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle with sides {} and {}", self.width, self.height)
    }
}

impl fmt::Debug for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle({}, {})", self.width, self.height)
    }
}

impl FromStr for Rectangle {
    type Err = RectangleError;

    /// Parses the debug form back into a rectangle.
    ///
    /// Supported formats:
    /// * **Rectangle**: "Rectangle(3, 4)".
    /// * **Square**: "Rectangle(3)".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix("Rectangle(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| RectangleError::malformed(s))?;

        let sides: Vec<i64> = inner
            .split(',')
            .map(|side| side.trim().parse::<i64>())
            .collect::<Result<Vec<i64>, _>>()
            .map_err(|_| RectangleError::malformed(s))?;

        match sides.as_slice() {
            [side] => Rectangle::new(*side, None),
            [width, height] => Rectangle::new(*width, Some(*height)),
            _ => Err(RectangleError::malformed(s)),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
