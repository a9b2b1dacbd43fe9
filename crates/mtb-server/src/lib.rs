//! Process wiring for the MTB data-intake validation core: configuration
//! and logging setup, the ambient concerns that sit outside the
//! validation/intake core proper.

pub mod config;

pub use config::Config;

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at process startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("mtb_server={level},mtb_intake={level}")));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();
}
