use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize structured logging with environment-based filtering.
///
/// - `RUST_LOG` selects the level, `info` when unset
/// - events are JSON with flattened fields
/// - output goes to stderr so command output on stdout stays parseable
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .json()
        .flatten_event(true)
        .init();
}

/// Pretty report rendering on a terminal, plain text otherwise.
pub fn default_log_mode() -> LogMode {
    if io::stderr().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Plain
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Plain,
    Pretty,
    Json,
}
