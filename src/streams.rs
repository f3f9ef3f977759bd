//! Stream management state, independent of how it is presented.
//!
//! [`StreamsController`] owns everything the stream screen shows (list, selection,
//! create form, pending deletion, alerts) and mutates it only from operation
//! completions. Each list-like slice is fenced by a request generation so a slow,
//! older response cannot overwrite a newer one.

use std::future::Future;

use crate::alerts::{AlertBoard, AlertPolicy};
use crate::deletion::{
    BlockerPolicy, ConfirmError, DeletionBackend, DeletionOutcome, PendingDeletion, SafeDeletion,
};
use crate::model::{Related, ResourceDescriptor, Service, Stream};
use crate::remote::{RemoteClient, ResourceService};
use crate::tags::TagBuffer;

/// Backend calls the stream screen makes.
pub trait StreamsBackend: DeletionBackend {
    fn list_streams(&self) -> impl Future<Output = Result<Vec<Stream>, String>> + Send;
    fn stream_types(&self) -> impl Future<Output = Result<Vec<String>, String>> + Send;
    fn list_services(&self) -> impl Future<Output = Result<Vec<Service>, String>> + Send;
    fn service(&self, name: &str) -> impl Future<Output = Result<Service, String>> + Send;
    fn save_stream(&self, stream: &Stream) -> impl Future<Output = Result<String, String>> + Send;
}

/// [`StreamsBackend`] over the REST API.
#[derive(Clone, Debug)]
pub struct StreamsApi {
    streams: ResourceService,
    services: ResourceService,
}

impl StreamsApi {
    pub fn new(client: &RemoteClient) -> Self {
        Self {
            streams: client.streams(),
            services: client.services(),
        }
    }
}

impl DeletionBackend for StreamsApi {
    fn list_related(&self, name: &str) -> impl Future<Output = Result<Related, String>> + Send {
        self.streams.list_related(name)
    }

    fn remove(
        &self,
        target: &ResourceDescriptor,
    ) -> impl Future<Output = Result<String, String>> + Send {
        self.streams.remove(target)
    }
}

impl StreamsBackend for StreamsApi {
    fn list_streams(&self) -> impl Future<Output = Result<Vec<Stream>, String>> + Send {
        self.streams.list::<Stream>()
    }

    fn stream_types(&self) -> impl Future<Output = Result<Vec<String>, String>> + Send {
        self.streams.types()
    }

    fn list_services(&self) -> impl Future<Output = Result<Vec<Service>, String>> + Send {
        self.services.list::<Service>()
    }

    fn service(&self, name: &str) -> impl Future<Output = Result<Service, String>> + Send {
        self.services.get::<Service>(name)
    }

    fn save_stream(&self, stream: &Stream) -> impl Future<Output = Result<String, String>> + Send {
        self.streams.create(stream)
    }
}

/// Monotonic request generation for one slice of state.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fence {
    latest: u64,
}

impl Fence {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Fences {
    streams: Fence,
    types: Fence,
    services: Fence,
    inspected: Fence,
}

#[derive(Debug)]
pub struct StreamsController {
    pub streams: Vec<Stream>,
    pub current: Option<String>,
    pub types: Vec<String>,
    pub services: Vec<Service>,
    pub inspected_service: Option<Service>,
    pub draft: Stream,
    pub tags: TagBuffer,
    pub saving: bool,
    /// Last load failure that did not warrant an alert.
    pub last_error: Option<String>,
    pub alerts: AlertBoard,
    pub deletion: SafeDeletion,
    fences: Fences,
}

impl Default for StreamsController {
    fn default() -> Self {
        Self::new(BlockerPolicy::default(), AlertPolicy::Single)
    }
}

impl StreamsController {
    pub fn new(blockers: BlockerPolicy, alerts: AlertPolicy) -> Self {
        Self {
            streams: Vec::new(),
            current: None,
            types: Vec::new(),
            services: Vec::new(),
            inspected_service: None,
            draft: Stream::draft(),
            tags: TagBuffer::new(),
            saving: false,
            last_error: None,
            alerts: AlertBoard::new(alerts),
            deletion: SafeDeletion::new(blockers),
            fences: Fences::default(),
        }
    }

    /// Loads streams, types and services, in that order.
    pub async fn load<B: StreamsBackend>(&mut self, backend: &B) {
        self.refresh_streams(backend).await;
        self.refresh_services(backend).await;
        self.refresh_types(backend).await;
    }

    pub fn begin_streams(&mut self) -> u64 {
        self.fences.streams.issue()
    }

    /// Applies a stream list response. The first stream becomes current.
    pub fn finish_streams(&mut self, token: u64, result: Result<Vec<Stream>, String>) -> bool {
        if !self.fences.streams.is_current(token) {
            tracing::debug!(token, "dropping stale stream list");
            return false;
        }
        match result {
            Ok(streams) => {
                self.current = streams.first().map(|s| s.name.clone());
                self.streams = streams;
                self.last_error = None;
            }
            Err(message) => self.last_error = Some(message),
        }
        true
    }

    pub async fn refresh_streams<B: StreamsBackend>(&mut self, backend: &B) {
        let token = self.begin_streams();
        let result = backend.list_streams().await;
        self.finish_streams(token, result);
    }

    pub fn begin_types(&mut self) -> u64 {
        self.fences.types.issue()
    }

    pub fn finish_types(&mut self, token: u64, result: Result<Vec<String>, String>) -> bool {
        if !self.fences.types.is_current(token) {
            return false;
        }
        match result {
            Ok(types) => self.types = types,
            Err(message) => self.alerts.danger(message),
        }
        true
    }

    pub async fn refresh_types<B: StreamsBackend>(&mut self, backend: &B) {
        let token = self.begin_types();
        let result = backend.stream_types().await;
        self.finish_types(token, result);
    }

    pub fn begin_services(&mut self) -> u64 {
        self.fences.services.issue()
    }

    pub fn finish_services(&mut self, token: u64, result: Result<Vec<Service>, String>) -> bool {
        if !self.fences.services.is_current(token) {
            return false;
        }
        match result {
            Ok(services) => self.services = services,
            Err(message) => self.last_error = Some(message),
        }
        true
    }

    pub async fn refresh_services<B: StreamsBackend>(&mut self, backend: &B) {
        let token = self.begin_services();
        let result = backend.list_services().await;
        self.finish_services(token, result);
    }

    pub async fn inspect_service<B: StreamsBackend>(&mut self, backend: &B, name: &str) {
        let token = self.fences.inspected.issue();
        let result = backend.service(name).await;
        if !self.fences.inspected.is_current(token) {
            return;
        }
        match result {
            Ok(service) => self.inspected_service = Some(service),
            Err(message) => {
                self.inspected_service = None;
                self.last_error = Some(message);
            }
        }
    }

    pub fn select(&mut self, name: &str) -> bool {
        if self.streams.iter().any(|s| s.name == name) {
            self.current = Some(name.to_string());
            true
        } else {
            false
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.current.as_deref() == Some(name)
    }

    pub fn current_stream(&self) -> Option<&Stream> {
        let name = self.current.as_deref()?;
        self.streams.iter().find(|s| s.name == name)
    }

    /// Selects `name` and looks up what still references it.
    pub async fn begin_delete<B: StreamsBackend>(
        &mut self,
        backend: &B,
        name: &str,
    ) -> Option<&PendingDeletion> {
        self.current = Some(name.to_string());
        self.deletion
            .begin(backend, ResourceDescriptor::named(name), &mut self.alerts)
            .await
    }

    /// Deletes the pending stream and reloads the list when the server agreed.
    pub async fn confirm_delete<B: StreamsBackend>(
        &mut self,
        backend: &B,
    ) -> Result<DeletionOutcome, ConfirmError> {
        let outcome = self
            .deletion
            .confirm_and_delete(backend, &mut self.alerts)
            .await?;
        if outcome.needs_refresh() {
            self.refresh_streams(backend).await;
        }
        Ok(outcome)
    }

    pub fn cancel_delete(&mut self) -> Option<PendingDeletion> {
        self.deletion.cancel()
    }

    /// Discards the create form.
    pub fn reset_draft(&mut self) {
        self.draft = Stream::draft();
        self.tags.clear();
    }

    /// Submits the create form. On success the form is reset and the list reloaded;
    /// on failure the form is kept for another try.
    pub async fn create_stream<B: StreamsBackend>(&mut self, backend: &B) -> Result<String, String> {
        self.tags.blur();
        let mut stream = self.draft.clone();
        stream.tags = self.tags.tags().to_vec();
        let stream = stream.prepared_for_save();

        self.saving = true;
        let result = backend.save_stream(&stream).await;
        self.saving = false;

        match &result {
            Ok(message) => {
                self.alerts.success(message.clone());
                self.reset_draft();
                self.refresh_streams(backend).await;
            }
            Err(message) => self.alerts.danger(message.clone()),
        }
        result
    }
}

#[cfg(test)]
#[path = "tests/streams_tests.rs"]
mod tests;
