//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! dispatcher / http / lifecycle
//!     → logging.rs (structured log events)
//!     → metrics.rs (request counters by outcome, latency)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
