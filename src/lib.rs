//! FreeSWITCH XML configuration service library.
//!
//! Answers `mod_xml_curl` configuration requests by rendering per-host JSON
//! settings through section templates, falling back to a fixed "not found"
//! document whenever no configuration applies.

pub mod config;
pub mod dispatch;
pub mod http;
pub mod lifecycle;
pub mod modules;
pub mod observability;
pub mod render;
pub mod settings;

pub use config::schema::ServiceConfig;
pub use dispatch::Dispatcher;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
