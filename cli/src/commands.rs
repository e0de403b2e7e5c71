pub mod measure;

use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use rectangle_core::config::LogLevel;

#[derive(Parser)]
#[command(name = "rectangle")]
#[command(about = "Measures a rectangle given its sides.")]
pub struct CommandLine {
    /// Log level: TRACE, DEBUG, INFO, WARNING or ERROR
    #[arg(short = 'l', long = "loglevel", default_value = "INFO")]
    pub loglevel: LogLevel,

    /// Width of the rectangle
    #[arg(short = 'x', long, allow_negative_numbers = true)]
    pub width: i64,

    /// Height of the rectangle, a square is assumed when omitted
    #[arg(short = 'y', long, allow_negative_numbers = true)]
    pub height: Option<i64>,

    /// Get the area of the rectangle
    #[arg(
        short = 'a',
        long = "area",
        action = ArgAction::Append,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "area",
        value_name = "COMMAND"
    )]
    area: Vec<String>,

    /// Get the perimeter of the rectangle
    #[arg(
        short = 'p',
        long = "perimeter",
        action = ArgAction::Append,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "perimeter",
        value_name = "COMMAND"
    )]
    perimeter: Vec<String>,

    /// Requested commands in the order they were given.
    #[arg(skip)]
    pub commands: Vec<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        let matches = Self::command().get_matches();
        let mut commands = Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
        commands.commands = commands.ordered_commands(&matches);
        commands
    }

    /// Merges the `-a` and `-p` occurrences back into command-line order.
    fn ordered_commands(&self, matches: &ArgMatches) -> Vec<String> {
        let flags = [("area", &self.area), ("perimeter", &self.perimeter)];
        let mut indexed: Vec<(usize, String)> = flags
            .into_iter()
            .flat_map(|(id, values)| {
                let indices = matches.indices_of(id).into_iter().flatten();
                indices.zip(values.iter().cloned())
            })
            .collect();

        indexed.sort_by_key(|(index, _)| *index);
        indexed.into_iter().map(|(_, command)| command).collect()
    }
}
