//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` overrides the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter from `RUST_LOG`, falling back to `log_level` for this
/// crate and the HTTP middleware.
pub fn filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "freeswitch_xml_config={level},tower_http={level}",
            level = log_level
        ))
    })
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(log_level: &str) {
    let _ = tracing_subscriber::registry()
        .with(filter(log_level))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
