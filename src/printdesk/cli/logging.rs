use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a tracing filter directive, e.g.
/// `PRINTDESK_LOG=printdesk=trace`.
pub const LOG_ENV: &str = "PRINTDESK_LOG";

/// Initialize tracing on stderr.
///
/// `PRINTDESK_LOG` wins when set. Otherwise only warnings are shown, or
/// everything down to debug with `--verbose`. Stdout stays reserved for
/// command output.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true);

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
