//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every call site converts these into a notice or a fallback render. The
//! session guard treats any variant as a rejection.

/// Failure of a backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// An admin request was attempted without a stored session token.
    #[error("not signed in")]
    Unauthorized,
    /// Browser-only call made during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, preferring the backend's own message.
    pub(crate) fn from_status(status: u16, server_message: Option<String>, fallback: &str) -> Self {
        let message = server_message
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_owned());
        Self::Status { status, message }
    }

    /// Text suitable for a notice: the backend message for status errors,
    /// `fallback` for everything else.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            Self::Unauthorized => "Please sign in again".to_owned(),
            _ => fallback.to_owned(),
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Network(err.to_string())
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{value:?}"))
}
