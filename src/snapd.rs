//! HTTP-over-Unix-socket transport for the snapd REST API.
//!
//! Each request opens its own connection, performs one HTTP/1.1 exchange and
//! drops the connection. Nothing is pooled or retried.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::client::conn::http1;
use hyper::header::{CONTENT_TYPE, HOST};
use hyper_util::rt::TokioIo;
use tokio::net::UnixStream;
use tracing::{debug, trace};

use crate::transport::{Request, Response, Transport, TransportError};

/// Where snapd listens on a standard install.
pub const DEFAULT_SOCKET_PATH: &str = "/run/snapd.socket";

/// A [`Transport`] that talks to snapd over its Unix domain socket.
#[derive(Debug, Clone)]
pub struct SnapdTransport {
    socket_path: PathBuf,
    timeout: Option<Duration>,
}

impl SnapdTransport {
    /// Creates a transport for the socket at `socket_path`.
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
            timeout: None,
        }
    }

    /// Bounds each exchange, connection included, by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    async fn exchange(&self, request: Request) -> Result<Response, TransportError> {
        let stream = UnixStream::connect(&self.socket_path)
            .await
            .map_err(TransportError::Connect)?;

        let (mut sender, connection) = http1::handshake(TokioIo::new(stream))
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;
        tokio::spawn(async move {
            if let Err(err) = connection.await {
                debug!(error = %err, "snapd connection closed with error");
            }
        });

        // The host is ignored by snapd but required by HTTP/1.1.
        let mut builder = hyper::Request::builder()
            .method(request.method.as_str())
            .uri(request.path.as_str())
            .header(HOST, "localhost");
        let body = match request.body {
            Some(bytes) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Full::new(Bytes::from(bytes))
            }
            None => Full::new(Bytes::new()),
        };
        let http_request = builder
            .body(body)
            .map_err(|e| TransportError::Http(e.to_string()))?;

        let http_response = sender
            .send_request(http_request)
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;
        let status = http_response.status().as_u16();
        let body = http_response
            .into_body()
            .collect()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?
            .to_bytes();
        trace!(status, bytes = body.len(), "read snapd response");

        Ok(Response::new(status, body.to_vec()))
    }
}

impl Default for SnapdTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SOCKET_PATH)
    }
}

#[async_trait]
impl Transport for SnapdTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.exchange(request))
                .await
                .map_err(|_| TransportError::Timeout(limit))?,
            None => self.exchange(request).await,
        }
    }
}
