//! Generic lookup-then-render pipeline.

use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::modules::{ConfigModule, ModuleError};
use crate::render::Template;
use crate::settings::HostSettingsDocument;

/// Directories every module resolves its files against.
///
/// Set once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ModulePaths {
    pub module_data_directory: PathBuf,
    pub templates_directory: PathBuf,
}

impl ModulePaths {
    pub fn new(module_data_directory: impl Into<PathBuf>, templates_directory: impl Into<PathBuf>) -> Self {
        Self {
            module_data_directory: module_data_directory.into(),
            templates_directory: templates_directory.into(),
        }
    }
}

/// Object-safe view of a module adapter, used by the dispatcher registry.
pub trait ConfigurationSource: Send + Sync {
    /// The `key_value` this source answers.
    fn key(&self) -> &'static str;

    /// Render the configuration for `hostname` into `out`.
    ///
    /// Nothing is written unless the whole fragment rendered.
    fn render(&self, hostname: &str, out: &mut dyn Write) -> Result<(), ModuleError>;
}

/// Adapter for a single configuration module.
#[derive(Debug)]
pub struct ModuleAdapter<M: ConfigModule> {
    settings_file: PathBuf,
    template_file: PathBuf,
    _module: PhantomData<fn() -> M>,
}

impl<M: ConfigModule> ModuleAdapter<M> {
    /// Resolve the settings and template paths for `M`. Reads nothing.
    pub fn configure(paths: &ModulePaths) -> Self {
        let settings_file = paths.module_data_directory.join(M::DATA_FILE);
        let template_file = paths.templates_directory.join(M::TEMPLATE);

        tracing::info!(
            module = M::KEY,
            settings_file = %settings_file.display(),
            template = %template_file.display(),
            "Module configured"
        );

        Self {
            settings_file,
            template_file,
            _module: PhantomData,
        }
    }

    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }

    pub fn template_file(&self) -> &Path {
        &self.template_file
    }

    /// Look up `hostname` and render its fragment to a string.
    pub fn render_to_string(&self, hostname: &str) -> Result<String, ModuleError> {
        tracing::debug!(module = M::KEY, hostname = %hostname, "Configuration request");

        let mut document = HostSettingsDocument::<M::Entry>::load(&self.settings_file)?;
        let entry = document.take(hostname).ok_or_else(|| ModuleError::NotFound {
            module: M::KEY,
            hostname: hostname.to_string(),
        })?;
        drop(document);

        let template = Template::load(&self.template_file)?;
        Ok(template.render(&M::context(entry))?)
    }
}

impl<M: ConfigModule> ConfigurationSource for ModuleAdapter<M> {
    fn key(&self) -> &'static str {
        M::KEY
    }

    fn render(&self, hostname: &str, out: &mut dyn Write) -> Result<(), ModuleError> {
        let rendered = self.render_to_string(hostname)?;
        out.write_all(rendered.as_bytes()).map_err(ModuleError::Write)
    }
}
