use serde::{Deserialize, Serialize};

/// Identifies one addressable resource inside a collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ResourceDescriptor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    pub fn versioned(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
        }
    }
}

/// Entities that reference a resource and would block (or warn about) its deletion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Related {
    #[serde(default)]
    pub instances: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("{collection} resource '{name}' has no version")]
    MissingVersion { collection: String, name: String },

    #[error("resource name is empty")]
    EmptyName,
}

/// Where a collection lives under the `/v1/` API root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Namespace {
    /// `/v1/custom/<collection>`: uploaded files and jars.
    Custom,
    /// `/v1/<collection>`: streams, services and the other platform entities.
    Root,
}

impl Namespace {
    fn prefix(self) -> &'static str {
        match self {
            Namespace::Custom => "custom/",
            Namespace::Root => "",
        }
    }
}

/// A named group of same-kind resources, addressed by a path segment.
///
/// One `Collection` value carries everything the generic resource service needs to
/// talk to that part of the API: where it lives, which `entity` keys hold its list
/// and single-item payloads, and how individual resources are addressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collection {
    pub segment: &'static str,
    pub namespace: Namespace,
    /// Keys checked, in order, inside `entity` when extracting a list payload.
    pub list_keys: &'static [&'static str],
    /// Key inside `entity` holding a single fetched item.
    pub item_key: &'static str,
}

/// List keys shared by every custom collection. The server names the array after
/// the resource kind, and files are checked before jars.
pub const CUSTOM_LIST_KEYS: &[&str] = &["custom-files", "custom-jars"];

impl Collection {
    pub const FILES: Collection = Collection::custom("files");
    pub const JARS: Collection = Collection::custom("jars");

    pub const STREAMS: Collection = Collection {
        segment: "streams",
        namespace: Namespace::Root,
        list_keys: &["streams"],
        item_key: "stream",
    };

    pub const SERVICES: Collection = Collection {
        segment: "services",
        namespace: Namespace::Root,
        list_keys: &["services"],
        item_key: "service",
    };

    pub const fn custom(segment: &'static str) -> Self {
        Collection {
            segment,
            namespace: Namespace::Custom,
            list_keys: CUSTOM_LIST_KEYS,
            item_key: "custom-file",
        }
    }

    /// Path of the collection itself, relative to the API root (`custom/jars`, `streams`).
    pub fn collection_path(&self) -> String {
        format!("{}{}", self.namespace.prefix(), self.segment)
    }

    /// Multipart field name the server expects for uploads into this collection.
    pub fn upload_field(&self) -> &'static str {
        if self.segment == "jars" { "jar" } else { "file" }
    }

    /// `{collection}/{name}` for files and root collections, `{collection}/{name}/{version}`
    /// for every other custom collection. Not prefixed with the namespace.
    pub fn addressable_path(&self, target: &ResourceDescriptor) -> Result<String, PathError> {
        if target.name.is_empty() {
            return Err(PathError::EmptyName);
        }
        if self.namespace == Namespace::Root || self.segment == "files" {
            return Ok(format!("{}/{}", self.segment, target.name));
        }
        let version = target
            .version
            .as_deref()
            .ok_or_else(|| PathError::MissingVersion {
                collection: self.segment.to_string(),
                name: target.name.clone(),
            })?;
        Ok(format!("{}/{}/{}", self.segment, target.name, version))
    }

    /// Addressable path with the namespace prefix, ready to append to the API root.
    pub fn resource_path(&self, target: &ResourceDescriptor) -> Result<String, PathError> {
        Ok(format!(
            "{}{}",
            self.namespace.prefix(),
            self.addressable_path(target)?
        ))
    }

    pub fn item_path(&self, name: &str) -> String {
        format!("{}/{}", self.collection_path(), name)
    }

    pub fn related_path(&self, name: &str) -> String {
        format!("{}/related", self.item_path(name))
    }

    pub fn types_path(&self) -> String {
        format!("{}/_types", self.collection_path())
    }
}

#[cfg(test)]
#[path = "../tests/model/resource_tests.rs"]
mod tests;
