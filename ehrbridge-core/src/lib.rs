//! ehrbridge-core
//!
//! Provider-agnostic runtime: the request pipeline, status mapping, wire-value
//! codec, scalar converters and telemetry shared by every remote-EHR provider.
#![deny(unsafe_code)]

pub mod auth;
pub mod defaults;
pub mod encoding;
pub mod error;
pub mod execution;
pub mod observability;
pub mod types;

pub use error::{Code, EhrError};
