//! Log output for the CLI.
//!
//! Every event is printed on one line behind a severity marker, e.g.
//! `(loc) DEBUG: 12 in '/src/main.rs'.`. Errors go to standard error,
//! everything else to standard output.

use std::fmt;
use std::io;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Event formatter writing `(<prefix>) <MARKER> <message>`.
struct SeverityMarker {
    prefix: &'static str,
}

fn marker(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "ERROR:",
        Level::WARN => "WARN: ",
        Level::INFO => "INFO::",
        _ => "DEBUG:",
    }
}

impl<S, N> FormatEvent<S, N> for SeverityMarker
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "({}) {} ",
            self.prefix,
            marker(event.metadata().level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber.
///
/// Errors are always shown; `debug` lowers the threshold to debug events.
pub fn init(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::ERROR };
    let writer = io::stderr.with_max_level(Level::ERROR).or_else(io::stdout);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(writer)
        .event_format(SeverityMarker { prefix: "loc" })
        .init();
}
