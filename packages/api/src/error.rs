use serde::Deserialize;
use thiserror::Error;

/// Failure of a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response. `message` comes from the server body when it has one.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("User not authenticated")]
    NotAuthenticated,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::NotAuthenticated) || self.status() == Some(401)
    }

    /// Text worth showing a user: what the server said, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::NotAuthenticated => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Human-readable message for an error response: the body's `message` (or
/// `error`) field, else the body itself when short, else the status line.
pub(crate) fn message_from_body(status: u16, reason: Option<&str>, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(msg) = parsed.message.or(parsed.error) {
            if !msg.trim().is_empty() {
                return msg;
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty()
        && trimmed.len() <= 200
        && !trimmed.starts_with('<')
        && !trimmed.starts_with('{')
    {
        return trimmed.to_string();
    }
    match reason {
        Some(reason) => format!("{status} {reason}"),
        None => format!("Request failed with status {status}"),
    }
}
