use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// `WARN  [12:00:01] browser_junit::report::writer: message`
pub struct ReporterFormatter;

impl<S, N> FormatEvent<S, N> for ReporterFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let timestamp = Local::now().format("%H:%M:%S");

        write!(
            writer,
            "{:<5} [{}] {}: ",
            level_label(metadata.level()),
            timestamp,
            metadata.target()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_label(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO => "INFO",
        Level::WARN => "WARN",
        Level::ERROR => "ERROR",
    }
}

/// Default filter: the reporter's own messages at debug when verbose,
/// warnings otherwise. `RUST_LOG` takes precedence.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "browser_junit=debug,warn"
    } else {
        "warn"
    }
}

/// Install the global subscriber
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .event_format(ReporterFormatter)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
