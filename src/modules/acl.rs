//! `acl.conf`: network lists.

use serde::{Deserialize, Serialize};

use crate::modules::{null_as_default, ConfigModule};

/// Access-list module descriptor.
pub struct Acl;

/// A single rule inside a network list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AclNode {
    /// `allow` or `deny`.
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    /// Address attribute, e.g. `cidr` or `domain`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AclList {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Default action when no node matches.
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nodes: Vec<AclNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AclSettings {
    #[serde(rename(deserialize = "acl.conf"), deserialize_with = "null_as_default")]
    pub lists: Vec<AclList>,
}

impl ConfigModule for Acl {
    const KEY: &'static str = "acl.conf";
    const DATA_FILE: &'static str = "acl.json";
    const TEMPLATE: &'static str = "configuration/acl/acl.xml";

    type Entry = AclSettings;
    type Context = AclSettings;

    fn context(entry: AclSettings) -> AclSettings {
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::HostSettingsDocument;
    use std::io::Write;

    #[test]
    fn test_deserialize_host_entry() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"fs-01": {{"acl.conf": [
                {{"name": "lan", "action": "allow",
                  "nodes": [{{"action": "deny", "type": "cidr", "value": "192.168.42.0/24"}}]}},
                {{"name": "empty", "action": "deny"}}
            ]}}}}"#
        )
        .unwrap();

        let mut doc = HostSettingsDocument::<AclSettings>::load(file.path()).unwrap();
        let settings = doc.take("fs-01").unwrap();

        assert_eq!(settings.lists.len(), 2);
        assert_eq!(settings.lists[0].name, "lan");
        assert_eq!(
            settings.lists[0].nodes[0],
            AclNode {
                action: "deny".into(),
                kind: "cidr".into(),
                value: "192.168.42.0/24".into(),
            }
        );
        assert!(settings.lists[1].nodes.is_empty());
    }

    #[test]
    fn test_context_exposes_lists() {
        let ctx = Acl::context(AclSettings {
            lists: vec![AclList {
                name: "proxy".into(),
                action: "deny".into(),
                nodes: vec![],
            }],
        });
        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(value["lists"][0]["name"], "proxy");
    }
}
