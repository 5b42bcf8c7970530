//! Metrics collection and exposition.
//!
//! # Metrics
//! - `xml_config_requests_total` (counter): requests by key and outcome
//! - `xml_config_request_duration_seconds` (histogram): time to answer
//!
//! Outcomes separate real absence (`not_found`, `unsupported_key`) from
//! operational failures (`io_error`, `parse_error`, `template_error`), which
//! the switch cannot tell apart in the response.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::dispatch::DispatchOutcome;

/// Label used for keys that match no registered module.
pub const UNSUPPORTED_KEY: &str = "unsupported";

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;

    describe_counter!(
        "xml_config_requests_total",
        "Configuration requests answered, by module key and outcome"
    );
    describe_histogram!(
        "xml_config_request_duration_seconds",
        "Time to answer a configuration request"
    );

    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one answered request. `key` must be a registered key or
/// [`UNSUPPORTED_KEY`].
pub fn record_request(key: &'static str, outcome: DispatchOutcome, start: Instant) {
    counter!(
        "xml_config_requests_total",
        "key" => key,
        "outcome" => outcome.as_str()
    )
    .increment(1);

    histogram!("xml_config_request_duration_seconds", "key" => key)
        .record(start.elapsed().as_secs_f64());
}
