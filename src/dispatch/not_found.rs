//! Fallback "not found" response.
//!
//! Tells the switch there is no configuration here so it moves on to its
//! next configuration source.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::render::Template;

/// File name of the fallback template inside the templates directory.
pub const NOT_FOUND_TEMPLATE: &str = "notfound.xml";

#[derive(Debug, Clone)]
pub struct NotFoundResponder {
    template_file: PathBuf,
}

impl NotFoundResponder {
    pub fn new(templates_directory: &Path) -> Self {
        let template_file = templates_directory.join(NOT_FOUND_TEMPLATE);
        tracing::info!(template = %template_file.display(), "Not found template configured");
        Self { template_file }
    }

    /// Write the not-found envelope to `out`.
    ///
    /// There is no further fallback: failures are logged and nothing is written.
    pub fn respond(&self, out: &mut dyn Write) {
        let rendered = Template::load(&self.template_file)
            .and_then(|template| template.render(&serde_json::Value::Null));

        match rendered {
            Ok(body) => {
                if let Err(e) = out.write_all(body.as_bytes()) {
                    tracing::error!(error = %e, "Could not write not found response");
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Could not load not found template");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_respond_renders_template_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let envelope = "<document type=\"freeswitch/xml\">\n  <result status=\"not found\" />\n</document>\n";
        fs::write(dir.path().join(NOT_FOUND_TEMPLATE), envelope).unwrap();

        let responder = NotFoundResponder::new(dir.path());
        let mut out = Vec::new();
        responder.respond(&mut out);
        assert_eq!(String::from_utf8(out).unwrap(), envelope);
    }

    #[test]
    fn test_missing_template_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let responder = NotFoundResponder::new(dir.path());
        let mut out = Vec::new();
        responder.respond(&mut out);
        assert!(out.is_empty());
    }
}
