use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "PAINEL_LOG";

/// Install the global subscriber. `PAINEL_LOG` wins over the configured
/// level; unknown directives fall back to "warn". Output goes to stderr.
pub fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // a second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
