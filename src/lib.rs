//! appperms: typed access to the snapd AppArmor prompting API.
//!
//! A [`PermissionServer`] turns a handful of operations (toggle prompting,
//! query its state, inspect custom rules) into single REST exchanges with
//! snapd. The exchange itself goes through a [`Transport`], so the server
//! can be driven by the real daemon socket or by a fake in tests.
//!
//! # Example
//!
//! ```
//! use appperms::{PermissionServer, Request, Response, Transport, TransportError};
//!
//! struct NoRules;
//!
//! #[async_trait::async_trait]
//! impl Transport for NoRules {
//!     async fn send(&self, _request: Request) -> Result<Response, TransportError> {
//!         Ok(Response::ok(r#"{"type":"sync","status-code":200,"status":"OK","result":[]}"#))
//!     }
//! }
//!
//! # tokio_test_block(async {
//! let server = PermissionServer::new(NoRules);
//! assert!(!server.are_custom_rules_applied().await.unwrap());
//! assert!(server.list_personal_folders_permissions().await.unwrap().is_empty());
//! # });
//! # fn tokio_test_block(f: impl std::future::Future<Output = ()>) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```
//!
//! With the `snapd` feature enabled, [`SnapdTransport`] talks to the daemon
//! over its Unix socket.

mod envelope;
mod error;
mod outcome;
mod rule;
mod ruleset;
mod server;
mod snapshot;
mod transport;

#[cfg(feature = "snapd")]
mod snapd;

#[cfg(test)]
mod testing;

pub use error::{DecodeError, Error, Result};
pub use outcome::Outcome;
pub use rule::{CustomRule, Lifespan, RuleConstraints};
pub use ruleset::Ruleset;
pub use server::{
    EXPERIMENTAL_CONF_PATH, PROMPTING_KEY, PermissionServer, RULES_PATH, SYSTEM_CONF_PATH,
};
pub use snapshot::PathSnapshot;
pub use transport::{Method, Request, Response, Transport, TransportError};

#[cfg(feature = "snapd")]
pub use snapd::{DEFAULT_SOCKET_PATH, SnapdTransport};
