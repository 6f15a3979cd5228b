//! Error handling types for ehrbridge.
//!
//! Shared by every crate in the workspace; depends only on `thiserror`.

mod conversions;
pub mod types;

pub use types::*;
