//! Matching service client. The only module that talks to the backend
//! that computes employee/project matches.
//!
//! Every call is a single request: no retry, no backoff. Failures surface to
//! the caller, which reports them and leaves the store untouched.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header::CONTENT_TYPE, multipart, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::results::ResultSet;
use crate::models::status::{DataStatus, ServiceEnvelope};
use crate::upload::UploadedFile;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Matching service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The service answered, but with a non-success `status` field.
    #[error("{0}")]
    NoData(String),
}

/// The matching backend as seen by the dashboard.
///
/// Carried in `AppState` as `Arc<dyn MatchingBackend>` so handlers can be
/// driven by an in-memory backend in tests.
#[async_trait]
pub trait MatchingBackend: Send + Sync {
    async fn data_status(&self) -> Result<DataStatus, ClientError>;

    /// Forwards the CSV files; returns the service's message, if any.
    async fn upload(&self, files: &[UploadedFile]) -> Result<Option<String>, ClientError>;

    async fn run_matching(&self) -> Result<Option<String>, ClientError>;

    async fn fetch_results(&self) -> Result<ResultSet, ClientError>;

    /// Raw PDF bytes of the results report.
    async fn download_report(&self) -> Result<Bytes, ClientError>;
}

#[derive(Clone)]
pub struct MatchingClient {
    client: Client,
    base_url: String,
}

impl MatchingClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and rejects any non-2xx status.
    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Matching service returned {}: {}", status, body);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn send_envelope<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ServiceEnvelope<T>, ClientError> {
        let envelope: ServiceEnvelope<T> = self.send(request).await?.json().await?;
        require_success(envelope)
    }
}

fn require_success<T>(envelope: ServiceEnvelope<T>) -> Result<ServiceEnvelope<T>, ClientError> {
    if envelope.is_success() {
        Ok(envelope)
    } else {
        Err(ClientError::NoData(envelope.message.unwrap_or_else(|| {
            format!("Matching service reported status '{}'", envelope.status)
        })))
    }
}

#[async_trait]
impl MatchingBackend for MatchingClient {
    async fn data_status(&self) -> Result<DataStatus, ClientError> {
        let status: DataStatus = self
            .send(self.client.get(self.url("/api/data")))
            .await?
            .json()
            .await?;
        debug!(
            "Data status: employees={}, projects={}",
            status.employees_count, status.projects_count
        );
        Ok(status)
    }

    async fn upload(&self, files: &[UploadedFile]) -> Result<Option<String>, ClientError> {
        let mut form = multipart::Form::new();
        for file in files {
            let part = multipart::Part::bytes(file.content.to_vec())
                .file_name(file.file_name.clone())
                .mime_str("text/csv")?;
            form = form.part(file.kind.field_name(), part);
        }

        let envelope: ServiceEnvelope<serde_json::Value> = self
            .send_envelope(self.client.post(self.url("/api/upload")).multipart(form))
            .await?;
        info!("Uploaded {} file(s) to matching service", files.len());
        Ok(envelope.message)
    }

    async fn run_matching(&self) -> Result<Option<String>, ClientError> {
        let envelope: ServiceEnvelope<serde_json::Value> = self
            .send_envelope(self.client.post(self.url("/api/match")))
            .await?;
        info!("Matching run completed");
        Ok(envelope.message)
    }

    async fn fetch_results(&self) -> Result<ResultSet, ClientError> {
        let envelope: ServiceEnvelope<ResultSet> = self
            .send_envelope(self.client.get(self.url("/api/results")))
            .await?;
        let results = envelope.data.unwrap_or_default();
        debug!("Fetched results for {} project(s)", results.len());
        Ok(results)
    }

    async fn download_report(&self) -> Result<Bytes, ClientError> {
        let response = self
            .send(self.client.get(self.url("/api/download-pdf")))
            .await?;

        // With no results the service answers 200 with a JSON error envelope.
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with("application/json"))
            .unwrap_or(false);

        let body = response.bytes().await?;
        if is_json {
            let envelope: ServiceEnvelope<serde_json::Value> = serde_json::from_slice(&body)?;
            require_success(envelope)?;
        }
        Ok(body)
    }
}
