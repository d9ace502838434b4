//! Tracing subscriber setup for the command-line front end.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding an `EnvFilter` directive.
pub(crate) const LOG_ENV: &str = "SCHEMA_FILTER_LOG";

/// Chooses the filter directive from the environment or the `-v` count.
///
/// A non-empty environment value wins. Without one, no subscriber is
/// installed unless `-v` was given.
pub(crate) fn log_directive(verbosity: u8, env: Option<&str>) -> Option<String> {
    if let Some(directive) = env.map(str::trim).filter(|value| !value.is_empty()) {
        return Some(directive.to_owned());
    }

    let level = match verbosity {
        0 => return None,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    Some(level.to_owned())
}

/// Installs a `fmt` subscriber writing to standard error.
///
/// Does nothing when a global subscriber is already set, so repeated calls
/// from one process are harmless.
pub(crate) fn init_logging(verbosity: u8) {
    let env = std::env::var(LOG_ENV).ok();
    let Some(directive) = log_directive(verbosity, env.as_deref()) else {
        return;
    };

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
