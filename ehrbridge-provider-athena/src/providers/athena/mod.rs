//! athenahealth provider
//!
//! - `config`: practice-scoped configuration and env loading
//! - `builder`: assembles an [`AthenaClient`] from config, token source,
//!   transport and telemetry
//! - `client`: one method per remote operation
//! - `policy`: per-operation error reshaping
//! - `api`: the [`AthenaApi`] trait implemented by the client

pub mod api;
pub mod builder;
pub mod client;
pub mod config;
pub mod policy;

pub use api::AthenaApi;
pub use builder::AthenaClientBuilder;
pub use client::AthenaClient;
pub use config::{AthenaConfig, AthenaConfigBuilder};
pub use policy::{ErrorPolicy, Operation, policy_for};
