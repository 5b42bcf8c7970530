//! Per-host settings storage.
//!
//! # Data Flow
//! ```text
//! <module_data_directory>/<module>.json
//!     → document.rs (read + deserialize, once per request)
//!     → HostSettingsDocument<S> (hostname → S)
//!     → take(hostname) hands one entry to the module adapter
//! ```
//!
//! # Design Decisions
//! - No caching: every lookup re-reads the backing file
//! - Whole-document parse, no partial results
//! - Absent hostname is a normal outcome, reported as `None`

pub mod document;

pub use document::{HostSettingsDocument, SettingsError};
