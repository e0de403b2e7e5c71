//! # Operation Logging
//!
//! Every validated rectangle operation runs inside [`logged`] or [`traced`],
//! which report the outcome once through `tracing` and hand the result back
//! untouched. Failures are logged at error level and propagated as-is.

use std::fmt::{Debug, Display};

use tracing::{debug, error};

use crate::rectangle::Rectangle;

/// A value an operation may return, as it should appear in the debug log.
///
/// `()` has nothing worth printing, so setters are reported as having
/// completed rather than as returning a value.
pub trait Outcome {
    fn describe(&self) -> Option<String>;
}

impl Outcome for () {
    fn describe(&self) -> Option<String> {
        None
    }
}

macro_rules! debug_outcome {
    ($($ty:ty),*) => {
        $(
            impl Outcome for $ty {
                fn describe(&self) -> Option<String> {
                    Some(format!("{self:?}"))
                }
            }
        )*
    };
}

debug_outcome!(i64, i128, bool, Rectangle);

/// Runs a fallible operation and logs how it ended.
pub fn logged<T, E, F>(operation: &str, args: &[&dyn Debug], f: F) -> Result<T, E>
where
    T: Outcome,
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    let result = f();

    match &result {
        Ok(value) => report_success(operation, args, value),
        Err(err) => error!(
            "Error {err} in {operation} with arguments ({})",
            join_args(args)
        ),
    }

    result
}

/// Runs an operation that cannot fail and logs its result.
pub fn traced<T, F>(operation: &str, args: &[&dyn Debug], f: F) -> T
where
    T: Outcome,
    F: FnOnce() -> T,
{
    let value = f();
    report_success(operation, args, &value);
    value
}

fn report_success<T: Outcome>(operation: &str, args: &[&dyn Debug], value: &T) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }

    let args = join_args(args);
    match value.describe() {
        Some(value) => debug!("{operation} returned {value} with arguments ({args})"),
        None => debug!("{operation} completed successfully with arguments ({args})"),
    }
}

fn join_args(args: &[&dyn Debug]) -> String {
    args.iter()
        .map(|arg| format!("{arg:?}"))
        .collect::<Vec<String>>()
        .join(", ")
}
