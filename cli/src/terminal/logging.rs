use std::io::IsTerminal;
use std::path::Path;

use chrono::Local;
use colored::*;
use rectangle_core::config::Config;
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Single-line event format:
/// `2024-05-01 12:00:00.123 |INFO    | message ( file.rs:42)`
pub struct RectangleFormatter;

impl<S, N> FormatEvent<S, N> for RectangleFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let label = format!("{:<8}", meta.level().as_str());
        let label = if writer.has_ansi_escapes() {
            paint(label, meta.level()).to_string()
        } else {
            label
        };

        write!(writer, "{} |{}| ", Local::now().format(TIMESTAMP_FORMAT), label)?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        let file = meta
            .file()
            .map(Path::new)
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .unwrap_or("?");

        writeln!(writer, " ( {}:{})", file, meta.line().unwrap_or_default())
    }
}

fn paint(label: String, level: &Level) -> ColoredString {
    match *level {
        Level::TRACE => label.dimmed(),
        Level::DEBUG => label.blue(),
        Level::INFO => label.green().bold(),
        Level::WARN => label.yellow().bold(),
        Level::ERROR => label.red().bold(),
    }
}

/// Installs the global subscriber writing to standard output.
pub fn init_logging(cfg: &Config) {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from(cfg.log_level))
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .event_format(RectangleFormatter)
        .init();
}
