use serde::Deserialize;
use thiserror::Error;

/// Errors returned by Webflow client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client was constructed without an API token.
    #[error("missing authentication token")]
    MissingToken,

    /// Base URL is not a valid absolute URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Endpoint path could not be joined to the base URL.
    #[error("invalid endpoint path '{0}'")]
    InvalidPath(String),

    /// Outbound request body could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// HTTP transport-layer failure, including timeouts.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body (success or error) is not the expected JSON.
    #[error("failed to parse JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// The API answered with a non-success status and a structured error body.
    #[error("api returned an error ({code}): {name}")]
    Api {
        status: reqwest::StatusCode,
        code: i64,
        name: String,
        message: Option<String>,
    },
}

impl ClientError {
    /// Returns `true` for errors caused by invalid client construction input.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingToken | Self::InvalidBaseUrl(_))
    }

    /// Remote error code, when the API reported one.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Error body sent by the API alongside any non-2xx status.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ApiErrorPayload {
    pub code: i64,
    pub name: String,
    #[serde(default)]
    pub msg: Option<String>,
}

impl ApiErrorPayload {
    pub(crate) fn into_error(self, status: reqwest::StatusCode) -> ClientError {
        ClientError::Api {
            status,
            code: self.code,
            name: self.name,
            message: self.msg,
        }
    }
}
