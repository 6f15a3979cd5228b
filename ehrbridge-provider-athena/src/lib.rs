//! ehrbridge-provider-athena
//!
//! athenahealth provider for ehrbridge.
//!
//! - `standards::athena`: wire shapes and the converters between them and the
//!   shared domain model
//! - `providers::athena`: configuration, the per-operation error policy and
//!   the client that executes every operation
#![deny(unsafe_code)]

pub mod providers;
pub mod standards;

pub(crate) use ehrbridge_core::{encoding, error, execution};

pub use providers::athena::{AthenaApi, AthenaClient, AthenaClientBuilder, AthenaConfig};
