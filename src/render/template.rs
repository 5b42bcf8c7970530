//! Loading and rendering a single template file.

use std::fs;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde::Serialize;

const TEMPLATE_NAME: &str = "template";

/// Error type for template loading and rendering.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("could not read template {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse template {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("could not render template {}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

impl TemplateError {
    pub fn path(&self) -> &Path {
        match self {
            TemplateError::Read { path, .. }
            | TemplateError::Parse { path, .. }
            | TemplateError::Render { path, .. } => path,
        }
    }
}

/// A template compiled from disk.
///
/// Holds its own registry so that two requests never share parsed state.
pub struct Template {
    path: PathBuf,
    registry: Handlebars<'static>,
}

impl Template {
    /// Read and compile the template at `path`.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let source = fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut registry = Handlebars::new();
        // Undefined variables are template bugs, not empty strings.
        registry.set_strict_mode(true);
        registry.register_escape_fn(xml_escape);
        registry
            .register_template_string(TEMPLATE_NAME, source)
            .map_err(|source| TemplateError::Parse {
                path: path.to_path_buf(),
                source: Box::new(source),
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            registry,
        })
    }

    /// Render against `data` into a fresh string.
    pub fn render<T: Serialize>(&self, data: &T) -> Result<String, TemplateError> {
        self.registry
            .render(TEMPLATE_NAME, data)
            .map_err(|source| TemplateError::Render {
                path: self.path.clone(),
                source: Box::new(source),
            })
    }
}

/// Escape a value for use in XML text or a double-quoted attribute.
pub fn xml_escape(data: &str) -> String {
    let mut out = String::with_capacity(data.len());
    for c in data.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
