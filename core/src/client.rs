//! Request wrapper that stamps default headers onto every call.
//!
//! # Design
//! `RequestWrapper` holds an immutable `Config` and an injected `Transport`.
//! Each verb is split into a `build_*` method that produces an `HttpRequest`
//! without I/O and a public method that sends it. Headers are recomputed
//! from the config on every call. Responses come back untouched: the
//! wrapper does not interpret status codes, retry, or override timeouts.

use serde::Serialize;

use crate::config::Config;
use crate::error::WrapperError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, QueryValue};
use crate::transport::{Transport, UreqTransport};

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header set for a request under `config`.
///
/// Always carries `Content-Type: application/json`; adds `x-api-key` only
/// when the config holds an effective key.
pub fn default_headers(config: &Config) -> Vec<(String, String)> {
    let mut headers = vec![(CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string())];
    if let Some(key) = config.effective_api_key() {
        headers.push((API_KEY_HEADER.to_string(), key.to_string()));
    }
    headers
}

/// Thin adapter over a `Transport` that standardizes headers.
#[derive(Debug, Clone)]
pub struct RequestWrapper<T> {
    config: Config,
    transport: T,
}

impl RequestWrapper<UreqTransport> {
    pub fn with_ureq(config: Config) -> Self {
        Self::new(config, UreqTransport::new())
    }
}

impl<T: Transport> RequestWrapper<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn headers(&self) -> Vec<(String, String)> {
        default_headers(&self.config)
    }

    pub fn build_get(&self, url: &str, params: Option<&[(&str, QueryValue)]>) -> HttpRequest {
        let query = params
            .unwrap_or_default()
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        HttpRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            query,
            headers: self.headers(),
            body: None,
        }
    }

    pub fn build_post<B>(&self, url: &str, body: &B) -> Result<HttpRequest, serde_json::Error>
    where
        B: Serialize + ?Sized,
    {
        self.build_with_body(HttpMethod::Post, url, body)
    }

    pub fn build_put<B>(&self, url: &str, body: &B) -> Result<HttpRequest, serde_json::Error>
    where
        B: Serialize + ?Sized,
    {
        self.build_with_body(HttpMethod::Put, url, body)
    }

    pub fn build_delete(&self, url: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: url.to_string(),
            query: Vec::new(),
            headers: self.headers(),
            body: None,
        }
    }

    pub fn get(
        &self,
        url: &str,
        params: Option<&[(&str, QueryValue)]>,
    ) -> Result<HttpResponse, WrapperError<T::Error>> {
        self.send(self.build_get(url, params))
    }

    pub fn post<B>(&self, url: &str, body: &B) -> Result<HttpResponse, WrapperError<T::Error>>
    where
        B: Serialize + ?Sized,
    {
        self.send(self.build_post(url, body)?)
    }

    pub fn put<B>(&self, url: &str, body: &B) -> Result<HttpResponse, WrapperError<T::Error>>
    where
        B: Serialize + ?Sized,
    {
        self.send(self.build_put(url, body)?)
    }

    pub fn delete(&self, url: &str) -> Result<HttpResponse, WrapperError<T::Error>> {
        self.send(self.build_delete(url))
    }

    fn build_with_body<B>(
        &self,
        method: HttpMethod,
        url: &str,
        body: &B,
    ) -> Result<HttpRequest, serde_json::Error>
    where
        B: Serialize + ?Sized,
    {
        Ok(HttpRequest {
            method,
            url: url.to_string(),
            query: Vec::new(),
            headers: self.headers(),
            body: Some(serde_json::to_string(body)?),
        })
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, WrapperError<T::Error>> {
        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.execute(request).map_err(|err| {
            tracing::debug!(%method, %url, error = %err, "transport failed");
            WrapperError::Transport(err)
        })?;
        tracing::debug!(%method, %url, status = response.status, "request completed");
        Ok(response)
    }
}
