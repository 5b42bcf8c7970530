//! FreeSWITCH configuration modules.
//!
//! # Data Flow
//! ```text
//! (hostname, writer)
//!     → adapter.rs  ModuleAdapter<M>
//!         → settings::HostSettingsDocument<M::Entry>::load(data file)
//!         → take(hostname)               (NotFound if absent)
//!         → render::Template::load(template file)
//!         → M::context(entry) → render → writer
//! ```
//!
//! # Design Decisions
//! - One pipeline, generic over a [`ConfigModule`] descriptor
//! - Descriptors only declare shape, key and file names
//! - Adapters hold resolved paths, never file contents

pub mod acl;
pub mod adapter;
pub mod distributor;
pub mod error;
pub mod sofia;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

pub use acl::Acl;
pub use adapter::{ConfigurationSource, ModuleAdapter, ModulePaths};
pub use distributor::Distributor;
pub use error::{ErrorKind, ModuleError};
pub use sofia::Sofia;

/// Describes one configuration kind the switch can request.
pub trait ConfigModule: Send + Sync + 'static {
    /// Value of `key_value` that selects this module, e.g. `"acl.conf"`.
    const KEY: &'static str;

    /// Settings file name inside the module data directory.
    const DATA_FILE: &'static str;

    /// Template path relative to the templates directory.
    const TEMPLATE: &'static str;

    /// Per-host settings as stored in the data file.
    type Entry: DeserializeOwned + Send;

    /// Value the template is rendered against.
    type Context: Serialize;

    fn context(entry: Self::Entry) -> Self::Context;
}

/// Decode `null` the same as an absent field.
///
/// Settings files written by other tools carry `null` for empty lists and
/// strings; those entries must still render.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
