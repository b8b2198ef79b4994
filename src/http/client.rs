//! HTTP transport for the E-Link service
//!
//! A thin wrapper over reqwest that joins relative operation paths onto the
//! configured base URL, attaches the bearer credential to every request,
//! and snapshots each response into a [`RawResponse`].
//!
//! One request is in flight at a time; there is no retry, backoff, or rate
//! limiting here. Every non-2xx outcome is classified downstream by
//! [`crate::validate::validate`] as a terminal fault.

use super::response::RawResponse;
use crate::config::ElinkConfig;
use crate::error::Result;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// HTTP client bound to one service target and token
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: ElinkConfig,
}

impl HttpClient {
    /// Create a client from the given configuration
    pub fn new(config: ElinkConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self { client, config })
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &ElinkConfig {
        &self.config
    }

    /// GET a relative path
    pub async fn get(&self, path: &str) -> Result<RawResponse> {
        let url = self.config.join(path)?;
        self.send(self.client.request(Method::GET, url)).await
    }

    /// GET a relative path with query parameters
    pub async fn get_with_query(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<RawResponse> {
        let url = self.config.join(path)?;
        let mut req = self.client.request(Method::GET, url);
        if !query.is_empty() {
            req = req.query(query);
        }
        self.send(req).await
    }

    /// POST a JSON body to a relative path
    pub async fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse> {
        let url = self.config.join(path)?;
        self.send(self.client.request(Method::POST, url).json(body))
            .await
    }

    /// PUT a JSON body to a relative path
    pub async fn put_json(&self, path: &str, body: &Value) -> Result<RawResponse> {
        let url = self.config.join(path)?;
        self.send(self.client.request(Method::PUT, url).json(body))
            .await
    }

    /// DELETE a relative path with query parameters
    pub async fn delete(&self, path: &str, query: &[(String, String)]) -> Result<RawResponse> {
        let url = self.config.join(path)?;
        let mut req = self.client.request(Method::DELETE, url);
        if !query.is_empty() {
            req = req.query(query);
        }
        self.send(req).await
    }

    /// POST a file as a multipart upload
    pub async fn post_file(
        &self,
        path: &str,
        query: &[(String, String)],
        file_path: &Path,
    ) -> Result<RawResponse> {
        let url = self.config.join(path)?;
        let mut req = self.client.request(Method::POST, url);
        if !query.is_empty() {
            req = req.query(query);
        }
        let form = file_form(file_path).await?;
        self.send(req.multipart(form)).await
    }

    /// PUT a file as a multipart upload
    pub async fn put_file(
        &self,
        path: &str,
        query: &[(String, String)],
        file_path: &Path,
    ) -> Result<RawResponse> {
        let url = self.config.join(path)?;
        let mut req = self.client.request(Method::PUT, url);
        if !query.is_empty() {
            req = req.query(query);
        }
        let form = file_form(file_path).await?;
        self.send(req.multipart(form)).await
    }

    /// Attach credentials, dispatch, and snapshot the response
    async fn send(&self, req: RequestBuilder) -> Result<RawResponse> {
        let req = match self.config.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let request = req.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.client.execute(request).await?;
        let raw = RawResponse::capture(response).await?;

        debug!("{} {} -> {}", method, url, raw.status());
        Ok(raw)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url().as_str())
            .field("has_token", &self.config.token().is_some())
            .finish_non_exhaustive()
    }
}

/// Read a local file into a single-part `file` form field
async fn file_form(file_path: &Path) -> Result<Form> {
    let bytes = tokio::fs::read(file_path).await?;
    let file_name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file")
        .to_string();

    let part = Part::bytes(bytes).file_name(file_name);
    Ok(Form::new().part("file", part))
}
