use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Failure of a backend call, carried across the server function boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{message}")]
    Backend { status: u16, message: String },
    #[error("network error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("Login failed: Invalid response from server")]
    MissingToken,
    #[error("Upload failed: No URL returned")]
    MissingUrl,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Builds the error for a non-2xx status from the body the backend sent.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body).unwrap_or_else(|| FALLBACK_MESSAGE.to_string());

        if status == 401 {
            ApiError::Unauthorized(message)
        } else {
            ApiError::Backend { status, message }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    /// Text shown to the user in a toast.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

fn extract_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

// Server fn errors travel as strings; JSON keeps the variant intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireError(pub ApiError);

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.0) {
            Ok(encoded) => f.write_str(&encoded),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for WireError {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map(WireError)
    }
}

impl From<ApiError> for WireError {
    fn from(err: ApiError) -> Self {
        WireError(err)
    }
}

pub type CallError = leptos::ServerFnError<WireError>;

/// Collapses any server fn failure into an [`ApiError`].
pub fn into_api_error(err: CallError) -> ApiError {
    match err {
        leptos::ServerFnError::WrappedServerError(WireError(api)) => api,
        other => ApiError::Transport(other.to_string()),
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
