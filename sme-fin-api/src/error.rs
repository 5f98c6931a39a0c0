use std::fmt::Display;
use thiserror::Error;

/// Failures surfaced to API callers.
///
/// Every variant carries the human-readable message returned in the error
/// envelope. Storage detail never reaches the message; it is logged where the
/// failure is collapsed into `Internal`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    /// A business rule gate is unmet, e.g. incomplete registration
    #[error("{0}")]
    Precondition(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) | ApiError::Precondition(_) => 400,
            ApiError::Auth(_) => 401,
            ApiError::Forbidden(_) => 403,
            ApiError::NotFound(_) => 404,
            ApiError::Internal(_) => 500,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation(m)
            | ApiError::Auth(m)
            | ApiError::Forbidden(m)
            | ApiError::NotFound(m)
            | ApiError::Precondition(m)
            | ApiError::Internal(m) => m,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Builds a `map_err` adapter that logs a storage failure with the operation
/// and subject it concerns, then collapses it into `ApiError::Internal`.
pub(crate) fn storage_failure<E: Display>(
    message: &'static str,
    subject: impl Display,
) -> impl FnOnce(E) -> ApiError {
    move |err| {
        tracing::error!(subject = %subject, error = %err, "{message}");
        ApiError::Internal(message.to_string())
    }
}
