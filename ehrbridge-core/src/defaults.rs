//! Default Configuration Values
//!
//! Centralizes the defaults used throughout ehrbridge.

use std::time::Duration;

/// HTTP client defaults
pub mod http {
    use super::*;

    /// Default request timeout for remote EHR calls.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Default connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string.
    pub const USER_AGENT: &str = concat!("ehrbridge/", env!("CARGO_PKG_VERSION"));
}

/// Telemetry defaults
pub mod telemetry {
    /// Response header carrying the remaining rate-limit quota.
    pub const RATE_LIMIT_HEADER: &str = "x-ratelimit-remaining";
}
