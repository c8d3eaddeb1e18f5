//! Typed errors for the recommendation request path.
//!
//! Uses `thiserror` for the definitions and implements `Serialize` so an
//! error can be handed to any rendering layer as data.

use serde::Serialize;
use thiserror::Error;

/// Everything that can end a recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum DispatchError {
    /// Blank text; never reaches the network
    #[error("No input to recommend from")]
    EmptyInput,

    /// Server answered with a non-2xx status
    #[error("HTTP {0}")]
    Http(u16),

    /// Connection, timeout or other transport failure
    #[error("{0}")]
    Network(String),

    /// Body was not a valid recommendation response
    #[error("Invalid response: {0}")]
    Parse(String),

    /// 2xx response carrying an explicit `error` field
    #[error("{0}")]
    Application(String),
}

impl DispatchError {
    /// Transport-level failures are shown with a generic server-error prefix.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DispatchError::Http(_) | DispatchError::Network(_) | DispatchError::Parse(_)
        )
    }
}

impl From<reqwest::Error> for DispatchError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return DispatchError::Http(status.as_u16());
        }
        DispatchError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for DispatchError {
    fn from(e: serde_json::Error) -> Self {
        DispatchError::Parse(e.to_string())
    }
}
