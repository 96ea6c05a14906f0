//! The boundary through which a single request/response exchange happens.
//!
//! [`PermissionServer`](crate::PermissionServer) only ever talks to the
//! daemon through a [`Transport`]. Production code plugs in the snapd
//! Unix-socket client; tests plug in a deterministic fake.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// HTTP methods used against the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outbound request description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Absolute path plus optional query, e.g. `/v2/snaps/system/conf?keys=experimental`.
    pub path: String,
    /// JSON body, if any.
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Creates a body-less `GET` request.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    /// Creates a request whose body is the compact encoding of `body`.
    ///
    /// # Example
    ///
    /// ```
    /// use appperms::{Method, Request};
    /// use serde_json::json;
    ///
    /// let req = Request::json(
    ///     Method::Put,
    ///     "/v2/snaps/system/conf",
    ///     &json!({"experimental.apparmor-prompting": true}),
    /// );
    /// assert_eq!(req.body_str(), Some(r#"{"experimental.apparmor-prompting":true}"#));
    /// ```
    pub fn json(method: Method, path: impl Into<String>, body: &serde_json::Value) -> Self {
        Self {
            method,
            path: path.into(),
            body: Some(body.to_string().into_bytes()),
        }
    }

    /// Returns the body as UTF-8, if present and valid.
    pub fn body_str(&self) -> Option<&str> {
        self.body
            .as_deref()
            .and_then(|b| std::str::from_utf8(b).ok())
    }
}

/// A response description: status code and raw body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200 OK` response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The exchange could not be completed, or the daemon refused it.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to connect to daemon: {0}")]
    Connect(#[source] std::io::Error),

    #[error("HTTP exchange failed: {0}")]
    Http(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("daemon returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Other(String),
}

/// Performs one request/response exchange.
///
/// Implementations must be safe to share between tasks; a
/// [`PermissionServer`](crate::PermissionServer) may be called concurrently.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        (**self).send(request).await
    }
}
