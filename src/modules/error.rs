//! Module rendering errors.

use std::path::Path;

use crate::render::TemplateError;
use crate::settings::SettingsError;

/// Error returned by a module adapter's render step.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("hostname not found [{hostname}] in {module}")]
    NotFound {
        module: &'static str,
        hostname: String,
    },

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("could not write rendered configuration: {0}")]
    Write(#[source] std::io::Error),
}

/// Coarse classification used for logging and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    NotFound,
    Template,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Io => "io_error",
            ErrorKind::Parse => "parse_error",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Template => "template_error",
        }
    }
}

impl ModuleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModuleError::Settings(SettingsError::Io { .. }) | ModuleError::Write(_) => ErrorKind::Io,
            ModuleError::Settings(SettingsError::Parse { .. }) => ErrorKind::Parse,
            ModuleError::NotFound { .. } => ErrorKind::NotFound,
            ModuleError::Template(_) => ErrorKind::Template,
        }
    }

    /// File involved in the failure, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ModuleError::Settings(e) => Some(e.path()),
            ModuleError::Template(e) => Some(e.path()),
            ModuleError::NotFound { .. } | ModuleError::Write(_) => None,
        }
    }
}
