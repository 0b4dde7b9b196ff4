//! `/api/*` forwarding to the task backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser calls `/api/...` on the page origin. This handler replays the
//! request against the configured upstream and relays status, content type
//! and body unchanged, so backend error responses reach the client flows
//! as-is.
//!
//! ERROR HANDLING
//! ==============
//! Upstream timeouts map to `504`, every other transport failure to `502`.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

/// Shared forwarding state. Clone is cheap; `reqwest::Client` is Arc-backed.
#[derive(Clone, Debug)]
pub struct ProxyState {
    client: reqwest::Client,
    upstream: String,
}

impl ProxyState {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(upstream: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client, upstream: upstream.into() })
    }

    #[must_use]
    pub fn upstream(&self) -> &str {
        &self.upstream
    }
}

fn upstream_url(upstream: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", upstream.trim_end_matches('/'))
}

/// `ANY /api/{*path}` — forward to the upstream backend.
pub async fn forward(
    State(proxy): State<ProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&proxy.upstream, &uri);

    let mut request = proxy.client.request(method.clone(), &url).body(body);
    for name in [CONTENT_TYPE, ACCEPT] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }

    let resp = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            let status = if e.is_timeout() { StatusCode::GATEWAY_TIMEOUT } else { StatusCode::BAD_GATEWAY };
            tracing::warn!(%method, %url, error = %e, %status, "upstream request failed");
            return status.into_response();
        }
    };

    let status = resp.status();
    let content_type = resp.headers().get(CONTENT_TYPE).cloned();
    let bytes = match resp.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "upstream body read failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    tracing::debug!(%method, %url, status = status.as_u16(), "proxied");
    let mut response = (status, bytes).into_response();
    if let Some(value) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, value);
    }
    response
}
