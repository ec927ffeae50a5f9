//! Error taxonomy for admin API requests
//!
//! Every failure is recoverable: the caller surfaces the message and stays
//! interactive, and retry is re-invoking the triggering action.

use crate::session::SessionError;

/// Errors that can occur while talking to the admin API
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the response never arrived.
    #[error("network error: {0}")]
    Network(reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("request timeout")]
    Timeout,

    /// The server answered `success: false`; the message is surfaced verbatim.
    #[error("{message}")]
    Api { message: String },

    /// The bearer credential was missing, expired, or rejected (401/403).
    #[error("authentication required: {0}")]
    AuthRequired(String),

    /// The addressed entity does not exist (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success HTTP status.
    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// The response body did not match the expected envelope.
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
