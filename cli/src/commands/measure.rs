use std::str::FromStr;

use rectangle_core::Rectangle;
use tracing::{error, info};

/// A measurement that can be requested from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Area,
    Perimeter,
}

impl FromStr for Measure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "area" => Ok(Measure::Area),
            "perimeter" => Ok(Measure::Perimeter),
            _ => Err(format!("unknown command: {s}")),
        }
    }
}

/// Logs each requested measurement of `rect`, in order.
///
/// Unknown commands are reported and skipped; they never stop the run.
pub fn measure(rect: &Rectangle, commands: &[String]) {
    for command in commands {
        match command.parse::<Measure>() {
            Ok(Measure::Area) => info!("{rect}, area is {}", rect.area()),
            Ok(Measure::Perimeter) => info!("{rect}, perimeter is {}", rect.perimeter()),
            Err(_) => error!("Invalid command entered: {command}, use -h for help"),
        }
    }
}
