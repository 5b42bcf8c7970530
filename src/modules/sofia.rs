//! `sofia.conf`: SIP profiles and gateways.
//!
//! The data file nests everything under a `"sofia.conf"` object per host;
//! the template is rendered against that inner object directly.

use serde::{Deserialize, Serialize};

use crate::modules::{null_as_default, ConfigModule};

pub struct Sofia;

/// A `<param name=".." value=".."/>` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Param {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Gateway {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub settings: Vec<Param>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gateways: Vec<Gateway>,
    #[serde(deserialize_with = "null_as_default")]
    pub settings: Vec<Param>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SofiaSettings {
    #[serde(deserialize_with = "null_as_default")]
    pub globals: Vec<Param>,
    #[serde(deserialize_with = "null_as_default")]
    pub profiles: Vec<Profile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SofiaEntry {
    #[serde(rename = "sofia.conf", deserialize_with = "null_as_default")]
    pub sofia: SofiaSettings,
}

impl ConfigModule for Sofia {
    const KEY: &'static str = "sofia.conf";
    const DATA_FILE: &'static str = "sofia.json";
    const TEMPLATE: &'static str = "configuration/sofia/sofia.xml";

    type Entry = SofiaEntry;
    type Context = SofiaSettings;

    fn context(entry: SofiaEntry) -> SofiaSettings {
        entry.sofia
    }
}
