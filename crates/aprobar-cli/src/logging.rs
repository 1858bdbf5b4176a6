//! Logging initialization at the process boundary.

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the verbosity level picks the
/// filter. Logs go to stderr so report output on stdout stays clean.
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbosity: Verbosity) {
    let default_filter = match verbosity {
        Verbosity::Quiet => "warn",
        Verbosity::Normal => "info",
        Verbosity::Verbose => "debug",
        Verbosity::Debug => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init(Verbosity::Quiet);
        init(Verbosity::Debug);
    }
}
