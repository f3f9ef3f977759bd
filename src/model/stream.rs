use serde::{Deserialize, Serialize};

/// The only stream type that carries a generator section.
pub const T_STREAM_TYPE: &str = "stream.t-stream";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type", default)]
    pub stream_type: String,

    #[serde(default)]
    pub service: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partitions: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_factor: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,

    #[serde(default)]
    pub force: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<Generator>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Generator {
    pub generator_type: String,
    pub service: String,
    pub instance_count: u32,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            generator_type: "local".to_string(),
            service: String::new(),
            instance_count: 0,
        }
    }
}

impl Stream {
    /// Blank stream used to seed the create form.
    pub fn draft() -> Self {
        Self {
            generator: Some(Generator::default()),
            ..Self::default()
        }
    }

    /// Drops the generator unless this is a t-stream; the server rejects it elsewhere.
    pub fn prepared_for_save(mut self) -> Self {
        if self.stream_type != T_STREAM_TYPE {
            self.generator = None;
        }
        self
    }
}

#[cfg(test)]
#[path = "../tests/model/stream_tests.rs"]
mod tests;
