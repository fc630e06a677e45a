//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::QuestionNumberError;

/// Errors emitted while talking to the quiz backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Transport failures and non-2xx statuses are worth another attempt;
    /// a body that does not decode will not get better.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Http { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else if let Some(status) = error.status() {
            Self::Http {
                status: status.as_u16(),
            }
        } else {
            Self::Network(error.to_string())
        }
    }
}

/// Errors emitted by the quiz session controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("No questions received from the server")]
    EmptyResult,
    #[error("questions have not been loaded")]
    NotLoaded,
    #[error("question {index} is already answered")]
    AlreadyAnswered { index: usize },
    #[error("server rejected the answer for question {index}")]
    Rejected { index: usize },
    #[error(transparent)]
    InvalidQuestionNumber(#[from] QuestionNumberError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted while reading client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
