//! XML response construction.
//!
//! The switch only inspects the body, so every answer (configuration or
//! not-found envelope) is `200 OK` with an XML content type.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

pub const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// A rendered XML body.
#[derive(Debug, Clone)]
pub struct XmlResponse(pub Vec<u8>);

impl IntoResponse for XmlResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, XML_CONTENT_TYPE)],
            self.0,
        )
            .into_response()
    }
}
