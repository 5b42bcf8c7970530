//! Configuration request dispatch.
//!
//! # Data Flow
//! ```text
//! (key_value, hostname)
//!     → dispatcher.rs (exact key match over registered sources)
//!         unknown key        → not_found.rs
//!         source.render(..)  → Ok: fragment written
//!                            → Err(any kind): logged, then not_found.rs
//! ```
//!
//! # Design Decisions
//! - The caller only distinguishes "configuration" from "try elsewhere";
//!   every failure yields the same not-found envelope
//! - Error kinds stay visible in logs and metrics via [`DispatchOutcome`]
//! - Registry is built once at startup and read-only afterwards

pub mod dispatcher;
pub mod not_found;

pub use dispatcher::{DispatchOutcome, Dispatcher, DispatcherBuilder};
pub use not_found::{NotFoundResponder, NOT_FOUND_TEMPLATE};
