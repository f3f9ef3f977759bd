//! The generic per-collection resource service.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::{Collection, Related, ResourceDescriptor};

use super::envelope::{extract, extract_item, extract_related};
use super::error::{ConsoleError, EnvelopeParseError};
use super::transfer::{Download, download_from_response, upload_form};
use super::transport::{Method, RequestOptions, Transport};

/// List/get/create/upload/download/delete over one [`Collection`].
///
/// Every public method resolves to `Result<_, String>`: failures are normalized into
/// the message the user should see.
#[derive(Clone, Debug)]
pub struct ResourceService {
    transport: Transport,
    collection: Collection,
}

fn surface(op: &'static str, collection: &Collection, err: ConsoleError) -> String {
    tracing::warn!(op, collection = collection.segment, error = %err, "resource operation failed");
    err.into_message()
}

impl ResourceService {
    pub fn new(transport: Transport, collection: Collection) -> Self {
        Self {
            transport,
            collection,
        }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub async fn list<T: DeserializeOwned>(&self) -> Result<Vec<T>, String> {
        self.list_at(&self.collection.collection_path()).await
    }

    /// Lists from an explicit scope path, normalizing with this collection's list keys.
    pub async fn list_at<T: DeserializeOwned>(&self, scope_path: &str) -> Result<Vec<T>, String> {
        self.try_list(scope_path)
            .await
            .map_err(|err| surface("list", &self.collection, err))
    }

    async fn try_list<T: DeserializeOwned>(&self, scope_path: &str) -> Result<Vec<T>, ConsoleError> {
        let resp = self
            .transport
            .request(Method::Get, scope_path, RequestOptions::json())
            .await?;
        Ok(extract(resp.json()?, self.collection.list_keys).into_list()?)
    }

    pub async fn get<T: DeserializeOwned>(&self, id: &str) -> Result<T, String> {
        self.try_get(id)
            .await
            .map_err(|err| surface("get", &self.collection, err))
    }

    async fn try_get<T: DeserializeOwned>(&self, id: &str) -> Result<T, ConsoleError> {
        let resp = self
            .transport
            .request(Method::Get, &self.collection.item_path(id), RequestOptions::json())
            .await?;
        let item = extract_item(resp.json()?, self.collection.item_key)?;
        serde_json::from_value(item).map_err(|err| {
            ConsoleError::Envelope(EnvelopeParseError::Unexpected {
                kind: "item",
                reason: err.to_string(),
            })
        })
    }

    /// POSTs a JSON payload and returns the server's confirmation message.
    pub async fn create<P: Serialize>(&self, payload: &P) -> Result<String, String> {
        self.try_create(payload)
            .await
            .map_err(|err| surface("create", &self.collection, err))
    }

    async fn try_create<P: Serialize>(&self, payload: &P) -> Result<String, ConsoleError> {
        let body = serde_json::to_value(payload).map_err(|err| EnvelopeParseError::Unexpected {
            kind: "payload",
            reason: err.to_string(),
        })?;
        let resp = self
            .transport
            .request(
                Method::Post,
                &self.collection.collection_path(),
                RequestOptions::json().with_json_body(body),
            )
            .await?;
        Ok(extract(resp.json()?, self.collection.list_keys).into_message()?)
    }

    /// Multipart upload of one file. Resolves with the raw response body on success
    /// and rejects with the raw body (or the mapped error when there is none).
    pub async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<String, String> {
        let form = upload_form(self.collection.upload_field(), filename, bytes);
        tracing::info!(
            collection = self.collection.segment,
            filename,
            field = self.collection.upload_field(),
            "uploading"
        );
        match self
            .transport
            .request(
                Method::Post,
                &self.collection.collection_path(),
                RequestOptions::multipart(form),
            )
            .await
        {
            Ok(resp) => Ok(resp.text()),
            Err(err) => {
                tracing::warn!(collection = self.collection.segment, error = %err, "upload rejected");
                let raw = err.body.clone().filter(|body| !body.is_empty());
                Err(raw.unwrap_or_else(|| ConsoleError::Transport(err).into_message()))
            }
        }
    }

    pub async fn download(&self, target: &ResourceDescriptor) -> Result<Download, String> {
        self.try_download(target)
            .await
            .map_err(|err| surface("download", &self.collection, err))
    }

    async fn try_download(&self, target: &ResourceDescriptor) -> Result<Download, ConsoleError> {
        let path = self.collection.resource_path(target)?;
        let resp = self
            .transport
            .request(Method::Get, &path, RequestOptions::blob())
            .await?;
        Ok(download_from_response(resp)?)
    }

    pub async fn remove(&self, target: &ResourceDescriptor) -> Result<String, String> {
        self.try_remove(target)
            .await
            .map_err(|err| surface("remove", &self.collection, err))
    }

    async fn try_remove(&self, target: &ResourceDescriptor) -> Result<String, ConsoleError> {
        let path = self.collection.resource_path(target)?;
        tracing::info!(collection = self.collection.segment, path = %path, "deleting");
        let resp = self
            .transport
            .request(Method::Delete, &path, RequestOptions::json())
            .await?;
        Ok(extract(resp.json()?, self.collection.list_keys).into_message()?)
    }

    /// Entities that reference `name`.
    pub async fn list_related(&self, name: &str) -> Result<Related, String> {
        self.try_list_related(name)
            .await
            .map_err(|err| surface("list_related", &self.collection, err))
    }

    async fn try_list_related(&self, name: &str) -> Result<Related, ConsoleError> {
        let resp = self
            .transport
            .request(
                Method::Get,
                &self.collection.related_path(name),
                RequestOptions::json(),
            )
            .await?;
        let instances = extract_related(resp.json()?)?;
        Ok(Related { instances })
    }

    /// Type names accepted by this collection (`GET {collection}/_types`).
    pub async fn types(&self) -> Result<Vec<String>, String> {
        self.try_types()
            .await
            .map_err(|err| surface("types", &self.collection, err))
    }

    async fn try_types(&self) -> Result<Vec<String>, ConsoleError> {
        let resp = self
            .transport
            .request(Method::Get, &self.collection.types_path(), RequestOptions::json())
            .await?;
        Ok(extract(resp.json()?, &["types"]).into_list()?)
    }
}
