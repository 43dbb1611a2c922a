//! The seam between the request wrapper and the network.

use ureq::typestate::WithBody;
use ureq::RequestBuilder;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes a described request and returns the server's response as data.
///
/// Implementations must hand back every status code as a response; only
/// failures to get a response at all are errors.
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error>;
}

/// Blocking transport backed by a `ureq::Agent`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Agent with ureq's status-code-as-error behavior turned off, so 4xx
    /// and 5xx arrive as responses.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    type Error = ureq::Error;

    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ureq::Error> {
        let mut response = match req.method {
            HttpMethod::Get => prepare(self.agent.get(&req.url), &req).call(),
            HttpMethod::Delete => prepare(self.agent.delete(&req.url), &req).call(),
            HttpMethod::Post => send(prepare(self.agent.post(&req.url), &req), req.body.as_deref()),
            HttpMethod::Put => send(prepare(self.agent.put(&req.url), &req), req.body.as_deref()),
        }?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn prepare<B>(builder: RequestBuilder<B>, req: &HttpRequest) -> RequestBuilder<B> {
    let builder = req
        .headers
        .iter()
        .fold(builder, |b, (name, value)| b.header(name.as_str(), value.as_str()));
    req.query
        .iter()
        .fold(builder, |b, (key, value)| b.query(key, value))
}

fn send(
    builder: RequestBuilder<WithBody>,
    body: Option<&str>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    match body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}
