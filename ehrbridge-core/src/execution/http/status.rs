//! HTTP status classification.
//!
//! One coarse table for every endpoint. Per-operation overrides live with the
//! provider.

use crate::error::{Code, EhrError};

/// Map an HTTP status to an error kind.
pub const fn code_for_status(status: u16) -> Code {
    match status {
        400 => Code::InvalidArgument,
        401 => Code::Unauthenticated,
        403 => Code::PermissionDenied,
        404 => Code::NotFound,
        409 => Code::AlreadyExists,
        500..=599 => Code::Internal,
        _ => Code::Unknown,
    }
}

/// Build the error for a failed response from its status and raw body text.
pub fn classify_http_error(status: u16, body_text: &str) -> EhrError {
    EhrError::new(
        code_for_status(status),
        format!("HTTP request had error response {status}: {body_text}"),
    )
}
