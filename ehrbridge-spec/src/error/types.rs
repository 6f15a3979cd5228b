//! Core error types.

use std::fmt;

use thiserror::Error;

/// RPC-style error kind.
///
/// This is the closed taxonomy every layer of the adapter reports in. It is
/// `Copy` so policies can match on it without touching the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    Unavailable,
    InvalidArgument,
    Unauthenticated,
    PermissionDenied,
    NotFound,
    AlreadyExists,
    Internal,
    Unknown,
    Unimplemented,
    DeadlineExceeded,
}

impl Code {
    /// Upper-snake RPC name, e.g. `NOT_FOUND`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unavailable => "UNAVAILABLE",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::Internal => "INTERNAL",
            Self::Unknown => "UNKNOWN",
            Self::Unimplemented => "UNIMPLEMENTED",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by every ehrbridge operation.
///
/// Each variant carries a diagnostic message with enough context (status
/// code, raw body, or the offending field/value) to debug a failure without
/// calling the remote system again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EhrError {
    /// Transport or network failure (DNS, refused connection, timeout).
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// Malformed call construction or a remote 400.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Decode failures, coercion failures, cardinality violations, remote 5xx.
    #[error("Internal error: {0}")]
    Internal(String),

    /// A remote status the default mapping does not recognise.
    #[error("Unknown error: {0}")]
    Unknown(String),

    /// The operation is disabled for this environment.
    #[error("Unimplemented: {0}")]
    Unimplemented(String),

    #[error("Deadline exceeded: {0}")]
    DeadlineExceeded(String),
}

impl EhrError {
    /// Build an error of the given kind.
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            Code::Unavailable => Self::Unavailable(message),
            Code::InvalidArgument => Self::InvalidArgument(message),
            Code::Unauthenticated => Self::Unauthenticated(message),
            Code::PermissionDenied => Self::PermissionDenied(message),
            Code::NotFound => Self::NotFound(message),
            Code::AlreadyExists => Self::AlreadyExists(message),
            Code::Internal => Self::Internal(message),
            Code::Unknown => Self::Unknown(message),
            Code::Unimplemented => Self::Unimplemented(message),
            Code::DeadlineExceeded => Self::DeadlineExceeded(message),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// The error kind.
    pub const fn code(&self) -> Code {
        match self {
            Self::Unavailable(_) => Code::Unavailable,
            Self::InvalidArgument(_) => Code::InvalidArgument,
            Self::Unauthenticated(_) => Code::Unauthenticated,
            Self::PermissionDenied(_) => Code::PermissionDenied,
            Self::NotFound(_) => Code::NotFound,
            Self::AlreadyExists(_) => Code::AlreadyExists,
            Self::Internal(_) => Code::Internal,
            Self::Unknown(_) => Code::Unknown,
            Self::Unimplemented(_) => Code::Unimplemented,
            Self::DeadlineExceeded(_) => Code::DeadlineExceeded,
        }
    }

    /// The diagnostic message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Unavailable(m)
            | Self::InvalidArgument(m)
            | Self::Unauthenticated(m)
            | Self::PermissionDenied(m)
            | Self::NotFound(m)
            | Self::AlreadyExists(m)
            | Self::Internal(m)
            | Self::Unknown(m)
            | Self::Unimplemented(m)
            | Self::DeadlineExceeded(m) => m,
        }
    }

    /// Prefix the message with `context`, keeping the kind.
    pub fn with_context(self, context: impl fmt::Display) -> Self {
        let message = format!("{context}: {}", self.message());
        Self::new(self.code(), message)
    }

    /// Whether the error came from the network layer rather than the remote EHR.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::DeadlineExceeded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_code_agree() {
        let codes = [
            Code::Unavailable,
            Code::InvalidArgument,
            Code::Unauthenticated,
            Code::PermissionDenied,
            Code::NotFound,
            Code::AlreadyExists,
            Code::Internal,
            Code::Unknown,
            Code::Unimplemented,
            Code::DeadlineExceeded,
        ];
        for code in codes {
            let err = EhrError::new(code, "boom");
            assert_eq!(err.code(), code);
            assert_eq!(err.message(), "boom");
        }
    }

    #[test]
    fn with_context_keeps_kind() {
        let err = EhrError::not_found("no such patient").with_context("failed to get patient");
        assert_eq!(err.code(), Code::NotFound);
        assert_eq!(err.message(), "failed to get patient: no such patient");
    }

    #[test]
    fn display_includes_kind() {
        let err = EhrError::internal("expected 1 result, received 0");
        assert_eq!(err.to_string(), "Internal error: expected 1 result, received 0");
        assert_eq!(Code::PermissionDenied.to_string(), "PERMISSION_DENIED");
    }
}
