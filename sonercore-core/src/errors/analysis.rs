//! Analysis request errors
//!
//! Two kinds reach the user: a request failure (the service answered with a
//! non-success status) and a transport or parse exception. Both collapse to a
//! single message string through `Display`.

use thiserror::Error;

/// Errors produced while requesting an analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The repository URL was empty; no request was issued
    #[error("Repository URL must not be empty")]
    EmptyRepoUrl,

    /// A request is already in flight
    #[error("An analysis is already running")]
    Busy,

    /// The service answered with a non-success status
    #[error("Error: {reason}{}", detail_suffix(.body))]
    Status {
        status: u16,
        reason: String,
        body: String,
    },

    /// The service could not be reached or the connection failed mid-request
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not a valid analysis result
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

fn detail_suffix(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(" ({})", trimmed)
    }
}

impl AnalysisError {
    pub fn status(status: u16, reason: impl Into<String>, body: impl Into<String>) -> Self {
        AnalysisError::Status {
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// Check if the service itself rejected the request
    pub fn is_request_failure(&self) -> bool {
        matches!(self, AnalysisError::Status { .. })
    }

    /// Check if the failure happened in transport or while parsing the body
    pub fn is_exception(&self) -> bool {
        matches!(self, AnalysisError::Transport(_) | AnalysisError::Decode(_))
    }

    /// Human-readable message stored by the summary view.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
