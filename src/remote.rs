use std::time::Duration;

use anyhow::Result;

use crate::config::ConsoleConfig;
use crate::model::Collection;

mod envelope;
pub use self::envelope::{
    Extracted, extract, extract_item, extract_related, map_error, parse_error_envelope,
};

mod error;
pub use self::error::{
    ApplicationError, ConsoleError, DownloadError, EnvelopeParseError, TransportError,
};

mod resources;
pub use self::resources::ResourceService;

mod transfer;
pub use self::transfer::{Download, filename_from_content_disposition, sanitize_download_filename};

mod transport;
pub use self::transport::{
    Method, RawResponse, RequestBody, RequestOptions, ResponseMode, Transport,
};

/// Entry point to the backend: hands out one [`ResourceService`] per collection, all
/// sharing a single connection pool.
#[derive(Clone, Debug)]
pub struct RemoteClient {
    transport: Transport,
}

impl RemoteClient {
    pub fn new(config: &ConsoleConfig) -> Result<Self> {
        let timeout = config.timeout_secs.map(Duration::from_secs);
        Self::with_base_url(&config.base_url, timeout)
    }

    pub fn with_base_url(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(base_url, timeout)?,
        })
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn collection(&self, collection: Collection) -> ResourceService {
        ResourceService::new(self.transport.clone(), collection)
    }

    pub fn files(&self) -> ResourceService {
        self.collection(Collection::FILES)
    }

    pub fn jars(&self) -> ResourceService {
        self.collection(Collection::JARS)
    }

    pub fn streams(&self) -> ResourceService {
        self.collection(Collection::STREAMS)
    }

    pub fn services(&self) -> ResourceService {
        self.collection(Collection::SERVICES)
    }
}
