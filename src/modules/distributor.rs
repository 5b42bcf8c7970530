//! `distributor.conf`: weighted load-distribution lists.

use serde::{Deserialize, Serialize};

use crate::modules::{null_as_default, ConfigModule};

pub struct Distributor;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DistributorNode {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub weight: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DistributorList {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total_weight: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub nodes: Vec<DistributorNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DistributorSettings {
    #[serde(rename(deserialize = "distributor.conf"), deserialize_with = "null_as_default")]
    pub lists: Vec<DistributorList>,
}

impl ConfigModule for Distributor {
    const KEY: &'static str = "distributor.conf";
    const DATA_FILE: &'static str = "distributor.json";
    const TEMPLATE: &'static str = "configuration/distributor/distributor.xml";

    type Entry = DistributorSettings;
    type Context = DistributorSettings;

    fn context(entry: DistributorSettings) -> DistributorSettings {
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_must_be_numeric() {
        let ok: Result<DistributorSettings, _> = serde_json::from_str(
            r#"{"distributor.conf": [{"name": "proxy", "total_weight": 2,
                "nodes": [{"name": "proxy-01.local", "weight": 1}]}]}"#,
        );
        let settings = ok.unwrap();
        assert_eq!(settings.lists[0].total_weight, 2);
        assert_eq!(settings.lists[0].nodes[0].weight, 1);

        let bad: Result<DistributorSettings, _> = serde_json::from_str(
            r#"{"distributor.conf": [{"name": "proxy", "total_weight": "two"}]}"#,
        );
        assert!(bad.is_err());
    }
}
