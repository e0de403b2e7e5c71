mod commands;
mod terminal;

use commands::{CommandLine, measure};
use rectangle_core::Rectangle;
use rectangle_core::config::Config;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        log_level: commands.loglevel,
    };
    logging::init_logging(&cfg);

    let rect = Rectangle::new(commands.width, commands.height)?;
    measure::measure(&rect, &commands.commands);

    Ok(())
}
