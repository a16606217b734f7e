//! The closed error taxonomy shared by every contract (spec §4.5).
//!
//! Every adapter — mock or real — must translate its own failures into one
//! of these six kinds before the error crosses a contract boundary. A
//! provider-specific error type leaking past an adapter is a contract
//! violation.

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// The six error kinds that cross every contract boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    ResourceNotFound,
    Authentication,
    ServiceUnavailable,
    Timeout,
    Conflict,
}

impl ErrorKind {
    /// Whether errors of this kind are eligible for the retry engine.
    ///
    /// `ServiceUnavailable` and `Timeout` are transient; everything else is a
    /// precondition or identity failure that won't resolve by retrying.
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorKind::ServiceUnavailable | ErrorKind::Timeout)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "ValidationError",
            ErrorKind::ResourceNotFound => "ResourceNotFoundError",
            ErrorKind::Authentication => "AuthenticationError",
            ErrorKind::ServiceUnavailable => "ServiceUnavailableError",
            ErrorKind::Timeout => "TimeoutError",
            ErrorKind::Conflict => "ConflictError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra, freeform context attached to a [`CloudError`]: resource identifiers,
/// the service that raised it, retry attempt counts, request IDs.
pub type ErrorContext = HashMap<String, String>;

/// The single error type returned by every contract method.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct CloudError {
    pub kind: ErrorKind,
    pub message: String,
    #[source]
    pub cause: Option<Box<dyn StdError + Send + Sync>>,
    pub context: ErrorContext,
}

impl CloudError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
            context: ErrorContext::new(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// A `ValidationError` anchored at a specific field path (spec §4.4's
    /// `{path, message}` error shape folded into the context map).
    pub fn validation_at(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message).with_context("path", path)
    }

    pub fn not_found(resource_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        let resource_type = resource_type.into();
        let identifier = identifier.into();
        Self::new(
            ErrorKind::ResourceNotFound,
            format!("{resource_type} '{identifier}' not found"),
        )
        .with_context("resource", resource_type)
        .with_context("identifier", identifier)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn with_cause(mut self, cause: impl StdError + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    /// Attach the attempt count the retry engine made before giving up.
    pub fn with_attempts(self, attempts: u32) -> Self {
        self.with_context("attempt", attempts.to_string())
    }
}

pub type CloudResult<T> = Result<T, CloudError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_resource_and_identifier() {
        let err = CloudError::not_found("secret", "db-password");
        assert_eq!(err.kind, ErrorKind::ResourceNotFound);
        assert_eq!(err.context.get("resource").unwrap(), "secret");
        assert_eq!(err.context.get("identifier").unwrap(), "db-password");
        assert!(!err.is_retryable());
    }

    #[test]
    fn service_unavailable_is_retryable() {
        let err = CloudError::service_unavailable("upstream reset");
        assert!(err.is_retryable());
    }

    #[test]
    fn validation_never_retryable() {
        assert!(!CloudError::validation("bad input").is_retryable());
    }
}
