//! Log setup and the diagnostic sink for failures the UI swallows.

use tracing_subscriber::EnvFilter;

use crate::error::Error;

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "quickgen=info";

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Receives errors that are handled locally instead of being returned.
pub trait DiagnosticSink {
    fn report(&mut self, message: &'static str, error: &Error);
}

/// Forwards reports to `tracing` at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, message: &'static str, error: &Error) {
        tracing::error!(error = %error, "{message}");
    }
}
