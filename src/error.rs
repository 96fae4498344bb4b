//! Client error types
//!
//! Every failure a roster operation can hit falls into one of two classes:
//! transport/parse failures (the request never produced a usable answer) and
//! application failures (the backend answered with a non-2xx status).

use thiserror::Error;

/// Errors that can occur while talking to the roster backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request could not be sent or no response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not the JSON we expected
    #[error("Parse error: {0}")]
    Parse(String),

    /// The backend answered with a non-2xx status
    #[error("Request rejected ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    /// The operation was refused before anything was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ClientError {
    /// Whether this is a transport/parse failure (logged, generic message)
    /// rather than an application-level rejection (shown verbatim).
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Network(_) | ClientError::Parse(_))
    }

    /// The server-provided detail, if the backend rejected the request with one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Parse(err.to_string())
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Parse(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
