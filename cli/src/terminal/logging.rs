use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::spinner::SpinnerWriter;

pub struct SonrFormatter;

impl<S, N> FormatEvent<S, N> for SonrFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        // Raw print lines carry their own styling; status lines get a
        // check mark instead of the level symbol.
        let symbol: Option<ColoredString> = match meta.target() {
            "sonr::print" => None,
            "sonr::success" => Some("[✓]".green().bold()),
            _ => Some(match *meta.level() {
                Level::TRACE => "[ ]".dimmed(),
                Level::DEBUG => "[?]".blue(),
                Level::INFO => "[+]".green().bold(),
                Level::WARN => "[*]".yellow().bold(),
                Level::ERROR => "[-]".red().bold(),
            }),
        };

        if let Some(symbol) = symbol {
            write!(writer, "{} ", symbol)?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .event_format(SonrFormatter)
        .with_env_filter(filter)
        .with_writer(|| SpinnerWriter)
        .init();
}
