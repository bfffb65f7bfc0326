/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::{fmt, io};

/// Error type for every fallible operation in the client
#[derive(Debug)]
pub enum AppError {
    /// Construction input rejected before any network call
    Validation(String),
    /// Login failed; no client is produced
    Authentication(String),
    /// Error raised by the HTTP library
    Network(reqwest::Error),
    /// Transport failure reported by a non-reqwest transport
    Transport(String),
    /// IO error
    Io(io::Error),
    /// JSON (de)serialization error
    Json(serde_json::Error),
    /// Server answered 401
    Unauthorized,
    /// The requested resource does not exist
    NotFound(String),
    /// Server answered with an unexpected non-2xx status
    Unexpected(StatusCode),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "validation error: {msg}"),
            AppError::Authentication(msg) => write!(f, "authentication error: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Transport(msg) => write!(f, "transport error: {msg}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound(what) => write!(f, "not found: {what}"),
            AppError::Unexpected(s) => write!(f, "unexpected http status: {s}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl AppError {
    /// Returns true for errors produced by the transport layer
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Transport(_))
    }
}
