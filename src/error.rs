//! Error taxonomy shared by services and view models.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortalError {
    /// The request never produced a usable response (fetch rejected, body unreadable).
    #[error("Network error: {0}")]
    Network(String),

    /// Login refused by the server or the portal role did not match.
    #[error("{0}")]
    Auth(String),

    /// Input rejected locally, no request was sent.
    #[error("{0}")]
    Validation(String),

    /// Non-success status from a non-auth endpoint; body kept as an opaque string.
    #[error("Server error: {0}")]
    Server(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl PortalError {
    /// Text shown inline in the page
    pub fn user_message(&self) -> String {
        match self {
            PortalError::Network(_) => "Network error. Please try again.".to_string(),
            PortalError::Auth(msg) | PortalError::Validation(msg) => msg.clone(),
            PortalError::Server(msg) => format!("Error: {}", msg),
            PortalError::Storage(_) => "Could not save your session in this browser.".to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, PortalError::Validation(_))
    }
}

impl From<gloo_net::Error> for PortalError {
    fn from(err: gloo_net::Error) -> Self {
        PortalError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Network(format!("Parse error: {}", err))
    }
}

/// Converts a thrown JS value into a network failure
pub fn js_error(err: JsValue) -> PortalError {
    PortalError::Network(format!("{:?}", err))
}

impl From<PortalError> for JsValue {
    fn from(err: PortalError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
