//! Error Handling Module
//!
//! The taxonomy lives in `ehrbridge-spec`; this module re-exports it so runtime
//! code can keep importing `crate::error::EhrError`.

pub use ehrbridge_spec::error::*;
