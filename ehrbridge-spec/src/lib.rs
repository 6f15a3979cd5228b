//! ehrbridge-spec
//!
//! Shared error taxonomy and domain types for ehrbridge.
//!
//! Contents: the RPC-style error kinds every layer reports, and the strongly
//! typed domain model that callers exchange with the adapter. HTTP execution, wire codecs and provider
//! implementations live in `ehrbridge-core` and `ehrbridge-provider-*`.
#![deny(unsafe_code)]

pub mod error;
pub mod types;

pub use error::{Code, EhrError};
