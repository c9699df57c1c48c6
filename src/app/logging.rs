//! Diagnostic logging to stderr.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, prelude::*};

/// Environment variable holding the log filter, e.g. `freeze_build=debug`.
pub const LOG_ENV_VAR: &str = "FREEZE_BUILD_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing. Call once at process startup.
///
/// `FREEZE_BUILD_LOG` takes precedence over `RUST_LOG`; without either only
/// warnings and errors are shown.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(true)
                .without_time(),
        )
        .try_init();
}
