use crate::transport::TransportError;

/// The response body did not have the expected shape.
#[derive(Debug, thiserror::Error)]
#[error("failed to decode {what} response: {source}")]
pub struct DecodeError {
    /// What was being decoded, for the message.
    pub what: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Error returned by every [`PermissionServer`](crate::PermissionServer) operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
