//! Key → module routing.

use std::collections::HashMap;
use std::io::Write;

use crate::dispatch::not_found::NotFoundResponder;
use crate::modules::{
    Acl, ConfigModule, ConfigurationSource, Distributor, ErrorKind, ModuleAdapter, ModulePaths,
    Sofia,
};

/// How a request was answered. Never changes the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The module fragment was written.
    Rendered,
    /// No module is registered for the key.
    UnsupportedKey,
    /// The module failed and the not-found envelope was written instead.
    Fallback(ErrorKind),
}

impl DispatchOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            DispatchOutcome::Rendered => "rendered",
            DispatchOutcome::UnsupportedKey => "unsupported_key",
            DispatchOutcome::Fallback(kind) => kind.as_str(),
        }
    }
}

/// Routes configuration requests to registered modules.
pub struct Dispatcher {
    sources: HashMap<&'static str, Box<dyn ConfigurationSource>>,
    not_found: NotFoundResponder,
}

impl Dispatcher {
    pub fn builder(paths: ModulePaths) -> DispatcherBuilder {
        DispatcherBuilder {
            not_found: NotFoundResponder::new(&paths.templates_directory),
            paths,
            sources: HashMap::new(),
        }
    }

    /// Dispatcher with every built-in module registered.
    pub fn standard(paths: ModulePaths) -> Self {
        Self::builder(paths)
            .register::<Acl>()
            .register::<Distributor>()
            .register::<Sofia>()
            .build()
    }

    /// Registered keys, sorted.
    #[cfg(test)]
    pub(crate) fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.sources.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// The registered key matching `key`, if any.
    pub fn resolve_key(&self, key: &str) -> Option<&'static str> {
        self.sources.get(key).map(|source| source.key())
    }

    /// Answer one request, writing either the module fragment or the
    /// not-found envelope to `out`.
    pub fn dispatch(&self, key: &str, hostname: &str, out: &mut dyn Write) -> DispatchOutcome {
        let Some(source) = self.sources.get(key) else {
            tracing::info!(key = %key, "Configuration request not supported");
            self.not_found.respond(out);
            return DispatchOutcome::UnsupportedKey;
        };

        match source.render(hostname, out) {
            Ok(()) => DispatchOutcome::Rendered,
            Err(e) => {
                let kind = e.kind();
                let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                if kind == ErrorKind::NotFound {
                    tracing::info!(key = %key, hostname = %hostname, "{}", e);
                } else {
                    tracing::error!(
                        key = %key,
                        hostname = %hostname,
                        kind = kind.as_str(),
                        path = %path,
                        error = %e,
                        "Could not load module configuration"
                    );
                }
                self.not_found.respond(out);
                DispatchOutcome::Fallback(kind)
            }
        }
    }
}

/// Collects module adapters into a [`Dispatcher`].
pub struct DispatcherBuilder {
    paths: ModulePaths,
    sources: HashMap<&'static str, Box<dyn ConfigurationSource>>,
    not_found: NotFoundResponder,
}

impl DispatcherBuilder {
    /// Register module `M`, resolving its files against the builder's paths.
    pub fn register<M: ConfigModule>(self) -> Self {
        let adapter = ModuleAdapter::<M>::configure(&self.paths);
        self.register_source(Box::new(adapter))
    }

    /// Register a pre-built source. A later registration replaces an earlier
    /// one with the same key.
    pub fn register_source(mut self, source: Box<dyn ConfigurationSource>) -> Self {
        let key = source.key();
        if self.sources.insert(key, source).is_some() {
            tracing::warn!(key = key, "Replacing previously registered module");
        }
        self
    }

    pub fn build(self) -> Dispatcher {
        tracing::debug!(modules = self.sources.len(), "Dispatcher built");
        Dispatcher {
            sources: self.sources,
            not_found: self.not_found,
        }
    }
}
