//! REST API client for the task backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and unit tests: every call returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Each call returns a typed `Result` so flows branch on failure explicitly
//! instead of losing a rejected future.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Credentials, LoginResponse, NewTask, Task, UserId};

/// API origin baked in at build time; empty means same origin.
const API_BASE: &str = match option_env!("TASKBOARD_API_BASE") {
    Some(base) => base,
    None => "",
};

/// Errors produced by backend calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    /// A 2xx body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Backend operations used by the page flows. Enables fakes in tests.
#[async_trait(?Send)]
pub trait TaskApi {
    /// `POST /api/register`.
    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError>;

    /// `POST /api/login`.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `GET /api/tasks/{user_id}`.
    async fn list_tasks(&self, user_id: &UserId) -> Result<Vec<Task>, ApiError>;

    /// `POST /api/tasks`. The response body is not read.
    async fn create_task(&self, task: &NewTask) -> Result<(), ApiError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn join_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint(base: &str) -> String {
    join_url(base, "/api/register")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(base: &str) -> String {
    join_url(base, "/api/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn tasks_endpoint(base: &str) -> String {
    join_url(base, "/api/tasks")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_tasks_endpoint(base: &str, user_id: &UserId) -> String {
    join_url(base, &format!("/api/tasks/{user_id}"))
}

/// `gloo-net` implementation of [`TaskApi`].
#[derive(Clone, Debug)]
pub struct HttpTaskApi {
    base: String,
}

impl Default for HttpTaskApi {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl HttpTaskApi {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }
}

#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

#[cfg(feature = "hydrate")]
fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<gloo_net::http::Request, ApiError> {
    gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            send(post_json(&register_endpoint(&self.base), credentials)?).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = send(post_json(&login_endpoint(&self.base), credentials)?).await?;
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn list_tasks(&self, user_id: &UserId) -> Result<Vec<Task>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = user_tasks_endpoint(&self.base, user_id);
            let request = gloo_net::http::Request::get(&url)
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = send(request).await?;
            resp.json::<Vec<Task>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn create_task(&self, task: &NewTask) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            send(post_json(&tasks_endpoint(&self.base), task)?).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = task;
            Err(ApiError::Unavailable)
        }
    }
}
