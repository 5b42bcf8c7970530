//! Request handling.
//!
//! # Responsibilities
//! - Decode the switch's form-encoded configuration request
//! - Generate a unique request ID (UUID v4) for log correlation

use axum::http::{HeaderName, HeaderValue, Request};
use serde::Deserialize;
use tower_http::request_id::{MakeRequestId, RequestId};

pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Form fields posted by `mod_xml_curl`.
///
/// Only `hostname` and `key_value` drive dispatch; the rest are logged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigurationRequest {
    pub hostname: String,
    pub section: String,
    pub tag_name: String,
    pub key_name: String,
    pub key_value: String,
}

/// Request ID generator backed by UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
