//! Diagnostic logging on stderr.
//!
//! Logs never go to stdout, which carries command output (`where` paths are
//! meant to be captured by scripts).

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit log filter, e.g. `debug`.
pub const LOG_ENV: &str = "THEMEPARK_LOG";

/// Installs the global subscriber.
///
/// `THEMEPARK_LOG` wins over the verbosity count. Calling this twice is
/// harmless; the second call is ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Filter used when `THEMEPARK_LOG` is unset.
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
