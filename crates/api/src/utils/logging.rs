use std::time::Duration;

use servdesk_domain::ServdeskError;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info,servdesk=debug";

/// Install the global subscriber.
///
/// Output is human-readable unless `SERVDESK_LOG_FORMAT=json`.
pub fn init_tracing() -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    if json_output_requested() {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    }
}

fn json_output_requested() -> bool {
    std::env::var("SERVDESK_LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"))
}

/// Log the outcome of a request with structured fields.
///
/// `route` is a stable identifier such as `"sla::save_configuration"`; callers
/// must not embed request data in it.
#[inline]
pub fn log_request_outcome(route: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(route, duration_ms, "request_success");
    } else {
        warn!(route, duration_ms, "request_failure");
    }
}

/// Convert a `ServdeskError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &ServdeskError) -> &'static str {
    match error {
        ServdeskError::Database(_) => "database",
        ServdeskError::Config(_) => "config",
        ServdeskError::Network(_) => "network",
        ServdeskError::NotFound(_) => "not_found",
        ServdeskError::InvalidInput(_) => "invalid_input",
        ServdeskError::Validation(_) => "validation",
        ServdeskError::Internal(_) => "internal",
    }
}
