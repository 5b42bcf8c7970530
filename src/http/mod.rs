//! HTTP transport.
//!
//! # Data Flow
//! ```text
//! POST /fs/configuration (form body)
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (form decode, request ID)
//!     → dispatch::Dispatcher (blocking, off the async executor)
//!     → response.rs (XML body, 200 OK)
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{ConfigurationRequest, MakeRequestUuid, X_REQUEST_ID};
pub use response::XmlResponse;
pub use server::{HttpServer, CONFIGURATION_PATH};
