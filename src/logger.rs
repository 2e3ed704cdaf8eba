//! Logging setup for demos, benches and applications
//!
//! The library itself only emits `tracing` events; nothing is printed unless the
//! application installs a subscriber. These helpers install one with a compact
//! bracketed format:
//!
//! ```text
//! [INFO 2026-10-14 09:12:44 relative_pose] message
//! [DEBUG 2026-10-14 09:12:44 group.rs:123] message
//! ```

use tracing::Level;

/// Initialize the subscriber at INFO level (overridable via `RUST_LOG`).
///
/// # Panics
/// Panics if a global subscriber is already installed. Use
/// [`try_init_logger_with_level`] where that can happen, e.g. in tests.
///
/// # Example
/// ```no_run
/// use planar_pose::init_logger;
///
/// init_logger();
/// tracing::info!("Application started");
/// ```
pub fn init_logger() {
    init_logger_with_level(Level::INFO)
}

/// Initialize the subscriber with a custom default level.
///
/// ```bash
/// RUST_LOG=planar_pose=debug cargo run --example relative_pose
/// ```
pub fn init_logger_with_level(default_level: Level) {
    builder(default_level).init();
}

/// Like [`init_logger_with_level`], but returns `false` instead of panicking when
/// a subscriber is already installed.
pub fn try_init_logger_with_level(default_level: Level) -> bool {
    builder(default_level).try_init().is_ok()
}

fn builder(
    default_level: Level,
) -> tracing_subscriber::fmt::SubscriberBuilder<
    tracing_subscriber::fmt::format::DefaultFields,
    BracketFormatter,
    tracing_subscriber::EnvFilter,
> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .event_format(BracketFormatter)
}

/// Colored level tag
fn level_tag(level: Level) -> &'static str {
    match level {
        Level::ERROR => "\x1b[31mERROR\x1b[0m",
        Level::WARN => "\x1b[33mWARN\x1b[0m",
        Level::INFO => "\x1b[32mINFO\x1b[0m",
        Level::DEBUG => "\x1b[34mDEBUG\x1b[0m",
        Level::TRACE => "\x1b[35mTRACE\x1b[0m",
    }
}

/// Event formatter writing `[LEVEL timestamp location] message`.
///
/// The location is `file:line` for DEBUG/TRACE and the event target otherwise.
struct BracketFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for BracketFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let level = *metadata.level();
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

        write!(writer, "[{} {} ", level_tag(level), timestamp)?;

        match (level >= Level::DEBUG, metadata.file()) {
            // Level ordering in tracing: TRACE > DEBUG > INFO > WARN > ERROR
            (true, Some(file)) => {
                let filename = file.rsplit('/').next().unwrap_or(file);
                write!(writer, "{}:{}", filename, metadata.line().unwrap_or(0))?;
            }
            _ => write!(writer, "{}", metadata.target())?,
        }

        write!(writer, "] ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
