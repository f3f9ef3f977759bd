use serde::{Deserialize, Serialize};

/// A platform service (Kafka, ZooKeeper, Elasticsearch, ...) that streams are bound to.
///
/// Only the fields the console shows are typed; everything else the server sends is
/// kept in `extra` so `show` output stays complete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,

    #[serde(rename = "type", default)]
    pub service_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
