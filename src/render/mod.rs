//! XML template rendering.
//!
//! Templates are Handlebars files read from the templates directory on every
//! use. Interpolated values are XML-escaped; the surrounding markup is emitted
//! as written.

pub mod template;

pub use template::{xml_escape, Template, TemplateError};
