//! Error types for quiz generation, editing, and provider calls.
//!
//! Provider errors live here so the generator can classify them for retry
//! decisions without string matching.

use thiserror::Error;

/// Errors that can occur when interacting with a text-generation provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The API returned a 429 rate limit response.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    /// Authentication failed (invalid API key).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The requested model was not found.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),
}

impl ProviderError {
    /// Returns `true` if this error is permanent and should not be retried.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            ProviderError::AuthenticationFailed(_) | ProviderError::ModelNotFound(_)
        )
    }

    /// Returns the retry-after delay in milliseconds, if applicable.
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            ProviderError::RateLimited { retry_after_ms } => Some(*retry_after_ms),
            _ => None,
        }
    }
}

/// Errors raised while producing or editing a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The generator output contained no `[...]` span.
    #[error("generation failed: no JSON array in generator output")]
    NoJsonArray,

    /// A `[...]` span was found but is not a valid JSON array.
    #[error("generation failed: invalid JSON array: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Neither typed text nor file text was supplied.
    #[error("no text to generate a quiz from")]
    EmptySource,

    /// A question was added with blank question text.
    #[error("question text must not be empty")]
    EmptyQuestion,

    /// An edit referenced a question index that does not exist.
    #[error("question index {index} out of range (quiz has {len} questions)")]
    IndexOutOfRange { index: usize, len: usize },
}
