use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of failures seen by the portal client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// The request never produced an HTTP response.
    Network,
    BadRequest,
    Unauthorized,
    NotFound,
    Conflict,
    /// The response body did not have the expected shape.
    Decode,
    /// The stored role requires a credential that is missing.
    SessionExpired,
    Server,
}

impl AppErrorKind {
    /// Map a non-success HTTP status onto an error kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => AppErrorKind::BadRequest,
            401 | 403 => AppErrorKind::Unauthorized,
            404 => AppErrorKind::NotFound,
            409 => AppErrorKind::Conflict,
            _ => AppErrorKind::Server,
        }
    }
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Decode => write!(f, "Decode"),
            AppErrorKind::SessionExpired => write!(f, "SessionExpired"),
            AppErrorKind::Server => write!(f, "Server"),
        }
    }
}

/// Error returned by API client calls and session checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Decode, message)
    }

    pub fn session_expired() -> Self {
        Self::new(
            AppErrorKind::SessionExpired,
            "Session expired or invalid login. Please log in again.",
        )
    }

    /// Build an error from a non-success HTTP status and the message
    /// extracted from its body.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::from_status(status), message)
    }

    /// Whether the failure happened before any HTTP response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, AppErrorKind::Network | AppErrorKind::Decode)
    }

    /// Text suitable for showing to the user.
    ///
    /// Transport and decoding details are never surfaced; backend messages are.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::Network | AppErrorKind::Decode => {
                "Something went wrong. Please try again.".to_string()
            }
            _ if self.message.trim().is_empty() => {
                "Something went wrong. Please try again.".to_string()
            }
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
