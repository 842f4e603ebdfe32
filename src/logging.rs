use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Variable that overrides the log filter, e.g. `REACTENV_LOG=reactenv=trace`.
pub const LOG_ENV: &str = "REACTENV_LOG";

static TRACING_INIT: Once = Once::new();

/// Filter directive implied by `-v` repetitions.
#[must_use]
pub const fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the stderr log subscriber. Later calls do nothing.
pub fn init(verbose: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
