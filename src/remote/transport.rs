use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;

use super::error::{EnvelopeParseError, TransportError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// How the response body is meant to be read by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseMode {
    #[default]
    Json,
    Blob,
}

pub enum RequestBody {
    Json(Value),
    Multipart(reqwest::multipart::Form),
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestBody::Json(v) => f.debug_tuple("Json").field(v).finish(),
            RequestBody::Multipart(_) => f.write_str("Multipart(..)"),
        }
    }
}

#[derive(Debug, Default)]
pub struct RequestOptions {
    pub headers: BTreeMap<String, String>,
    pub mode: ResponseMode,
    pub body: Option<RequestBody>,
}

impl RequestOptions {
    /// JSON request and response, with the content-type header the backend expects.
    pub fn json() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            headers,
            mode: ResponseMode::Json,
            body: None,
        }
    }

    pub fn blob() -> Self {
        Self {
            mode: ResponseMode::Blob,
            ..Self::default()
        }
    }

    pub fn multipart(form: reqwest::multipart::Form) -> Self {
        Self {
            body: Some(RequestBody::Multipart(form)),
            ..Self::default()
        }
    }

    pub fn with_json_body(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// A fully read 2xx response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: reqwest::header::HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json(&self) -> std::result::Result<Value, EnvelopeParseError> {
        serde_json::from_slice(&self.body).map_err(|err| EnvelopeParseError::NotJson(err.to_string()))
    }
}

/// Thin HTTP wrapper rooted at `{base_url}/v1/`.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Transport {
    client: reqwest::Client,
    api_root: String,
}

impl Transport {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent("sj-console");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("build reqwest client")?;
        Ok(Self {
            client,
            api_root: format!("{}/v1/", base_url.trim_end_matches('/')),
        })
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path.trim_start_matches('/'))
    }

    /// Builds a request future. Nothing is sent until the future is polled, and
    /// dropping it abandons the request.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> impl Future<Output = std::result::Result<RawResponse, TransportError>> + Send + 'static
    {
        let client = self.client.clone();
        let url = self.url(path);
        async move {
            tracing::debug!(method = ?method, url = %url, mode = ?options.mode, "request");
            let mut req = client.request(method.as_reqwest(), &url);
            for (name, value) in &options.headers {
                req = req.header(name.as_str(), value.as_str());
            }
            req = match options.body {
                Some(RequestBody::Json(body)) => req.json(&body),
                Some(RequestBody::Multipart(form)) => req.multipart(form),
                None => req,
            };

            let resp = req.send().await.map_err(|err| {
                tracing::warn!(url = %url, error = %err, "request failed");
                TransportError::network(err.to_string())
            })?;

            let status = resp.status();
            let headers = resp.headers().clone();
            let body = resp
                .bytes()
                .await
                .map_err(|err| TransportError::network(format!("read body: {}", err)))?
                .to_vec();
            tracing::debug!(url = %url, status = status.as_u16(), bytes = body.len(), "response");

            if !status.is_success() {
                tracing::warn!(url = %url, status = status.as_u16(), "request rejected");
                return Err(TransportError {
                    status: status.as_u16(),
                    status_text: status.canonical_reason().unwrap_or("").to_string(),
                    body: if body.is_empty() {
                        None
                    } else {
                        Some(String::from_utf8_lossy(&body).into_owned())
                    },
                });
            }

            Ok(RawResponse {
                status: status.as_u16(),
                headers,
                body,
            })
        }
    }
}

#[cfg(test)]
#[path = "../tests/remote/transport_tests.rs"]
mod tests;
