use std::env;
use std::io;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the tracing filter directives
pub const LOG_ENV: &str = "BULKREN_LOG";

/// Install the stderr subscriber. Falls back to `warn` when `BULKREN_LOG` is
/// unset or unparsable.
pub fn init_logger(use_color: bool) {
    let filter = env::var(LOG_ENV)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time()
                .with_ansi(use_color),
        )
        .with(filter)
        .try_init();
}
