//! # ehrbridge
//!
//! Typed async access to a remote EHR's practice-scoped REST API. athenahealth
//! is the only provider today.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use ehrbridge::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), EhrError> {
//!     ehrbridge::telemetry::init_tracing(&TracingConfig::default())?;
//!
//!     let client = AthenaClientBuilder::new(AthenaConfig::from_env()?)
//!         .token_provider(Arc::new(StaticTokenProvider::new("token")))
//!         .build()?;
//!
//!     let patient = client.get_patient("29").await?;
//!     println!("{:?}", patient.name);
//!     Ok(())
//! }
//! ```
//!
//! Every operation returns `Result<_, EhrError>`; [`EhrError::code`] gives the
//! error kind after the operation's error policy has been applied.
#![deny(unsafe_code)]

pub mod telemetry;

pub use ehrbridge_core as core;
pub use ehrbridge_provider_athena as athena;
pub use ehrbridge_spec as spec;

pub use ehrbridge_spec::{Code, EhrError, types};

pub mod prelude {
    pub use crate::telemetry::{OutputFormat, TracingConfig, init_tracing};

    pub use ehrbridge_core::auth::{SharedTokenProvider, StaticTokenProvider, TokenProvider};
    pub use ehrbridge_core::observability::{
        MemoryTelemetrySink, MetricsGaugeSink, NoopTelemetrySink, TelemetrySink,
    };
    pub use ehrbridge_core::types::HttpConfig;
    pub use ehrbridge_provider_athena::providers::athena::{
        AthenaApi, AthenaClient, AthenaClientBuilder, AthenaConfig, AthenaConfigBuilder,
        ErrorPolicy, Operation,
    };
    pub use ehrbridge_spec::types::*;
    pub use ehrbridge_spec::{Code, EhrError};
}
