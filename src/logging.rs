//! Process-wide log output for hosts embedding the client core.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset: this crate at `info`, dependencies
/// only when they warn.
const DEFAULT_FILTER: &str = "warn,quickmem=info";

/// Install the fmt subscriber with RFC 3339 UTC timestamps.
///
/// Returns `false` if the host already installed a global subscriber, in which
/// case that one keeps receiving the crate's events.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .try_init()
        .is_ok()
}
