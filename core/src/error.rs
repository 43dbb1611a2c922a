//! Error types for the harness.
//!
//! # Design
//! Configuration problems are startup failures and get their own type so a
//! fixture can refuse to run before any request is issued. Transport errors
//! are never reinterpreted: `WrapperError::Transport` carries whatever the
//! injected transport returned, unchanged.

use thiserror::Error;

/// Errors raised while validating `BASE_URL` / `API_KEY`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `BASE_URL` does not parse as a URL.
    #[error("BASE_URL is not a valid URL: {value:?}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// `BASE_URL` parses but has no host to send requests to.
    #[error("BASE_URL must be an absolute URL with a host: {value:?}")]
    MissingHost { value: String },

    /// `BASE_URL` carries a query or fragment that paths would land after.
    #[error("BASE_URL must not carry a query or fragment: {value:?}")]
    QueryOrFragment { value: String },
}

/// Errors returned by `RequestWrapper` calls.
#[derive(Debug, Error)]
pub enum WrapperError<E>
where
    E: std::error::Error + 'static,
{
    /// The transport failed before a response was received.
    #[error(transparent)]
    Transport(E),

    /// The request payload could not be serialized to JSON.
    #[error("request body could not be serialized: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while reading a response body.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The body is not JSON of the expected shape.
    #[error("response body could not be deserialized: {0}")]
    Deserialization(#[from] serde_json::Error),
}
