use std::collections::BTreeMap;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use sj_console::model::{Generator, T_STREAM_TYPE};

use super::*;

pub(super) const STREAM_TYPES: &[&str] = &[
    T_STREAM_TYPE,
    "stream.apache-kafka",
    "stream.elasticsearch",
    "stream.sql-database",
    "stream.restful",
];

/// Jar versions fall back to this when the file name carries none.
pub(super) const DEFAULT_JAR_VERSION: &str = "1.0";

#[derive(Clone, Debug)]
pub(super) struct StoredFile {
    pub(super) meta: CustomFile,
    pub(super) bytes: Vec<u8>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub(super) struct Instance {
    pub(super) name: String,
    #[serde(default)]
    pub(super) streams: Vec<String>,
}

#[derive(Default)]
pub(super) struct AppState {
    pub(super) files: RwLock<BTreeMap<String, StoredFile>>,
    /// Keyed by (name, version).
    pub(super) jars: RwLock<BTreeMap<(String, String), StoredFile>>,
    pub(super) streams: RwLock<BTreeMap<String, Stream>>,
    pub(super) services: RwLock<BTreeMap<String, Service>>,
    pub(super) instances: RwLock<BTreeMap<String, Instance>>,
}

impl AppState {
    pub(super) async fn seed_demo(&self) {
        let mut services = self.services.write().await;
        for (name, kind, provider) in [
            ("kafka-service", "service.apache-kafka", "kafka-provider"),
            ("tstream-service", "service.t-streams", "zookeeper-provider"),
            ("zk-service", "service.zookeeper", "zookeeper-provider"),
        ] {
            services.insert(
                name.to_string(),
                Service {
                    name: name.to_string(),
                    service_type: kind.to_string(),
                    description: Some(format!("demo {}", kind)),
                    provider: Some(provider.to_string()),
                    extra: serde_json::Map::new(),
                },
            );
        }
        drop(services);

        let mut streams = self.streams.write().await;
        streams.insert(
            "input-stream".to_string(),
            Stream {
                name: "input-stream".to_string(),
                stream_type: T_STREAM_TYPE.to_string(),
                service: "tstream-service".to_string(),
                tags: vec!["demo".to_string(), "input".to_string()],
                partitions: Some(3),
                generator: Some(Generator::default()),
                ..Stream::default()
            },
        );
        streams.insert(
            "kafka-output".to_string(),
            Stream {
                name: "kafka-output".to_string(),
                stream_type: "stream.apache-kafka".to_string(),
                service: "kafka-service".to_string(),
                tags: vec!["demo".to_string()],
                partitions: Some(1),
                replication_factor: Some(1),
                ..Stream::default()
            },
        );
        drop(streams);

        self.instances.write().await.insert(
            "demo-instance".to_string(),
            Instance {
                name: "demo-instance".to_string(),
                streams: vec!["input-stream".to_string(), "kafka-output".to_string()],
            },
        );
    }

    /// Instances whose inputs or outputs include `stream`.
    pub(super) async fn instances_using(&self, stream: &str) -> Vec<String> {
        self.instances
            .read()
            .await
            .values()
            .filter(|i| i.streams.iter().any(|s| s == stream))
            .map(|i| i.name.clone())
            .collect()
    }
}

pub(super) fn now_ts() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}

/// `engine-1.2.jar` → `1.2`; names without a numeric suffix get the default.
pub(super) fn jar_version(filename: &str) -> String {
    filename
        .strip_suffix(".jar")
        .and_then(|stem| stem.rsplit_once('-'))
        .map(|(_, v)| v)
        .filter(|v| v.starts_with(|c: char| c.is_ascii_digit()))
        .unwrap_or(DEFAULT_JAR_VERSION)
        .to_string()
}

#[cfg(test)]
#[path = "../../tests/bin/sj_dev_server/state_tests.rs"]
mod tests;
