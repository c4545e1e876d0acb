// ============================================================================
// ERRORS - Client error taxonomy
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::utils::ANALYSIS_FAILED_MESSAGE;

/// Client-side upload validation failures. The display text is what the
/// user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Please select a file to upload.")]
    MissingFile,
    #[error("Please select a valid JSON file.")]
    NotJson,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// Rejected before any request was sent.
    #[error(transparent)]
    Validation(#[from] UploadRejection),

    /// The server answered without a redirect.
    #[error("submission rejected: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid status payload: {0}")]
    InvalidStatus(String),

    #[error("Analysis failed. Please try again.")]
    AnalysisFailed,

    #[error("DOM error: {0}")]
    Dom(String),
}

impl ClientError {
    /// Text for the inline error box, if this error is shown to the user.
    /// `network_message` is the generic text of the form that failed.
    pub fn user_message(&self, network_message: &str) -> Option<String> {
        match self {
            ClientError::Validation(rejection) => Some(rejection.to_string()),
            ClientError::Rejected(reason) => reason.clone(),
            ClientError::Network(_) | ClientError::Dom(_) => Some(network_message.to_string()),
            ClientError::AnalysisFailed => Some(ANALYSIS_FAILED_MESSAGE.to_string()),
            ClientError::InvalidStatus(_) => None,
        }
    }
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ClientError::Dom(message)
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::SerdeError(e) => ClientError::InvalidStatus(e.to_string()),
            other => ClientError::Network(other.to_string()),
        }
    }
}
