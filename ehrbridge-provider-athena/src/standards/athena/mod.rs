//! athenahealth protocol implementation
//!
//! Wire types, enumeration tables and the structural converters between
//! athena's string-typed payloads and the domain model. The orchestrator in
//! `providers::athena` uses these to build requests and interpret responses.

pub mod transformers;
pub mod types;
pub mod utils;
