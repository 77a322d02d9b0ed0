//! Outcome of a single endpoint call.

use crate::error::{CallError, TransportError};

/// Why a call that reached the server did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Status outside `200..300`.
    Status,
    /// 2xx status, but the body did not decode into the expected shape.
    Decode(String),
}

/// Result of one endpoint call.
///
/// Exactly one of three outcomes: the server answered 2xx with a body of
/// the expected shape, the server answered but not acceptably, or the
/// exchange never completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallResult<T> {
    /// 2xx status and a body matching `T`.
    Success { status: u16, body: T },

    /// The server answered, but with a non-2xx status or an undecodable body.
    ///
    /// `status` and `raw_body` are optional so a failure can be reported even
    /// when the reply was cut short; the client always fills both.
    Failure {
        status: Option<u16>,
        raw_body: Option<String>,
        reason: FailureReason,
    },

    /// The server could not be reached or stopped responding.
    TransportError { cause: TransportError },
}

impl<T> CallResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, CallResult::Success { .. })
    }

    /// Whether this is a decode failure on a 2xx reply.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            CallResult::Failure {
                reason: FailureReason::Decode(_),
                ..
            }
        )
    }

    /// HTTP status, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            CallResult::Success { status, .. } => Some(*status),
            CallResult::Failure { status, .. } => *status,
            CallResult::TransportError { .. } => None,
        }
    }

    /// Decoded body of a successful call.
    pub fn body(&self) -> Option<&T> {
        match self {
            CallResult::Success { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Raw body of a failed call.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            CallResult::Failure { raw_body, .. } => raw_body.as_deref(),
            _ => None,
        }
    }

    /// Transform the decoded body, keeping the outcome.
    pub fn map<U, F>(self, f: F) -> CallResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            CallResult::Success { status, body } => CallResult::Success {
                status,
                body: f(body),
            },
            CallResult::Failure {
                status,
                raw_body,
                reason,
            } => CallResult::Failure {
                status,
                raw_body,
                reason,
            },
            CallResult::TransportError { cause } => CallResult::TransportError { cause },
        }
    }

    /// Convert into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<T, CallError> {
        match self {
            CallResult::Success { body, .. } => Ok(body),
            CallResult::Failure {
                status,
                raw_body,
                reason,
            } => {
                let status = status.unwrap_or_default();
                let body = raw_body.unwrap_or_default();
                Err(match reason {
                    FailureReason::Status => CallError::Status { status, body },
                    FailureReason::Decode(message) => CallError::Decode {
                        status,
                        message,
                        body,
                    },
                })
            }
            CallResult::TransportError { cause } => Err(CallError::Transport(cause)),
        }
    }
}
