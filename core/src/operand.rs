//! # Operand Guard
//!
//! Comparison and arithmetic on rectangles accept any [`Operand`], so a
//! caller holding a number or a string gets a [`RectangleError::TypeMismatch`]
//! instead of a silent coercion. [`expect_rectangle`] is the guard every such
//! operation runs before touching its operand.

use std::fmt::Debug;

use crate::error::RectangleError;
use crate::rectangle::Rectangle;

/// A value that may be handed to a rectangle operation.
pub trait Operand: Debug {
    /// Name of the runtime type, reported when the operand is rejected.
    fn type_name(&self) -> &'static str;

    fn as_rectangle(&self) -> Option<&Rectangle> {
        None
    }
}

impl Operand for Rectangle {
    fn type_name(&self) -> &'static str {
        "Rectangle"
    }

    fn as_rectangle(&self) -> Option<&Rectangle> {
        Some(self)
    }
}

macro_rules! foreign_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Operand for $ty {
                fn type_name(&self) -> &'static str {
                    stringify!($ty)
                }
            }
        )*
    };
}

foreign_operand!(i32, i64, u32, u64, f64, bool, str, String);

/// Returns the operand as a rectangle, or fails before any computation happens.
pub fn expect_rectangle<O>(operand: &O) -> Result<&Rectangle, RectangleError>
where
    O: Operand + ?Sized,
{
    operand
        .as_rectangle()
        .ok_or(RectangleError::TypeMismatch {
            found: operand.type_name(),
        })
}
