//! Request wrapper and configuration for black-box tests of the users API.
//!
//! # Overview
//! `Config` reads `BASE_URL` / `API_KEY` once; `RequestWrapper` stamps the
//! default headers onto every GET/POST/PUT/DELETE and hands the request to
//! an injected `Transport`. Scenarios assert on the raw `HttpResponse`.
//!
//! # Design
//! - The wrapper builds plain-data `HttpRequest`s (`build_*`) separately
//!   from sending them, so header rules are testable without a network.
//! - `UreqTransport` is the production transport; tests swap in recorders.
//! - No retries, caching or status interpretation anywhere in the crate.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod timing;
pub mod transport;
pub mod types;

pub use client::{default_headers, RequestWrapper};
pub use config::Config;
pub use error::{ConfigError, ResponseError, WrapperError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, QueryValue};
pub use timing::{timed, LatencyBudget};
pub use transport::{Transport, UreqTransport};
pub use types::{CreatedUser, SingleUser, UpdatedUser, User, UserInput, UserPage};
