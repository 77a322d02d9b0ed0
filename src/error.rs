//! Error types for the album client.

use thiserror::Error;

/// Errors raised while constructing the client.
///
/// Endpoint calls never return this type; they report their outcome through
/// [`CallResult`](crate::CallResult).
#[derive(Debug, Error)]
pub enum AlbumError {
    /// The configured base URL is not an absolute http(s) URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The underlying HTTP client could not be built.
    #[error("Client build error: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Network-level fault: the server could not be reached or stopped responding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The connect, read or write timeout elapsed.
    #[error("Request timed out")]
    Timeout,

    /// DNS resolution, TCP connect or TLS handshake failed.
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Any other failure while sending the request or reading the reply.
    #[error("Request failed: {0}")]
    Request(String),
}

impl TransportError {
    /// Classify a reqwest error.
    pub(crate) fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() || has_timed_out_source(err) {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(error_chain(err))
        } else {
            TransportError::Request(error_chain(err))
        }
    }
}

/// Walks the source chain looking for an I/O timeout.
///
/// reqwest only flags its own deadline as a timeout; a per-read timeout
/// surfaces as a nested `io::ErrorKind::TimedOut`.
fn has_timed_out_source(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut source = err.source();
    while let Some(inner) = source {
        if let Some(io) = inner.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::TimedOut {
                return true;
            }
        }
        source = inner.source();
    }
    false
}

fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

/// Error form of a non-successful [`CallResult`](crate::CallResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The server answered 2xx but the body did not match the expected shape.
    #[error("Decode error (HTTP {status}): {message}")]
    Decode {
        status: u16,
        message: String,
        body: String,
    },

    /// The exchange never completed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Result type alias for client construction.
pub type Result<T> = std::result::Result<T, AlbumError>;
