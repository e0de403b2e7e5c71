//! # Rectangle Core
//!
//! The shared library behind the `rectangle` command line tool.
//!
//! * **[`rectangle`]**: The [`Rectangle`] value type, its measures and its
//!   area-based comparisons and arithmetic.
//! * **[`operand`]**: Runtime guard that rejects anything that is not a rectangle.
//! * **[`logging`]**: Wrappers that report every operation's outcome through `tracing`.
//! * **[`config`]**: Runtime settings collected from the command line.
//! * **[`error`]**: The error kinds shared by all of the above.

pub mod config;
pub mod error;
pub mod logging;
pub mod operand;
pub mod rectangle;

pub use error::{Dimension, RectangleError};
pub use operand::Operand;
pub use rectangle::Rectangle;
