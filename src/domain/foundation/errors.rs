//! Error types surfaced by handlers.
//!
//! Adapters forward these untouched. A handler either completes, fails with
//! an author fault, or reports that its caller withdrew interest.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Error codes for author faults, organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidRequest,

    // Lookup errors
    NotFound,
    Conflict,

    // Authorization errors
    Unauthorized,
    Forbidden,

    // Infrastructure errors
    Unavailable,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::Unavailable => "UNAVAILABLE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Author fault with code, message, and optional details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Creates a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

/// Outcome of a failed handler invocation.
///
/// `Cancelled` is reserved for "the caller withdrew interest" so that it is
/// never confused with a handler failure.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("handling was cancelled by the caller")]
    Cancelled,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Other(Box<dyn Error + Send + Sync + 'static>),
}

impl HandlerError {
    /// Wraps an arbitrary error raised by a handler body.
    pub fn other<E>(error: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        HandlerError::Other(error.into())
    }

    /// Returns true for the cancellation outcome.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, HandlerError::Cancelled)
    }

    /// Returns the domain error if this is an author fault with a code.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            HandlerError::Domain(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::not_found("Session not found");
        assert_eq!(format!("{}", err), "[NOT_FOUND] Session not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::validation("email", "Validation failed")
            .with_detail("reason", "invalid format");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"email".to_string()));
        assert_eq!(
            err.details.get("reason"),
            Some(&"invalid format".to_string())
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InvalidRequest), "INVALID_REQUEST");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }

    #[test]
    fn cancelled_is_distinct_from_author_faults() {
        assert!(HandlerError::Cancelled.is_cancelled());
        let not_found = HandlerError::from(DomainError::not_found("x"));
        assert!(!not_found.is_cancelled());
        assert!(!HandlerError::other("boom").is_cancelled());
    }

    #[test]
    fn domain_errors_display_transparently() {
        let err = HandlerError::from(DomainError::new(ErrorCode::Conflict, "already exists"));
        assert_eq!(err.to_string(), "[CONFLICT] already exists");
        assert_eq!(err.as_domain().map(|e| e.code), Some(ErrorCode::Conflict));
    }

    #[test]
    fn other_errors_display_transparently() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = HandlerError::other(io);
        assert_eq!(err.to_string(), "disk on fire");
        assert!(err.as_domain().is_none());
    }

    #[test]
    fn cancelled_has_readable_message() {
        assert_eq!(
            HandlerError::Cancelled.to_string(),
            "handling was cancelled by the caller"
        );
    }
}
