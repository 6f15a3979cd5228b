//! Domain model shared by every provider.
//!
//! All values here are strongly typed: dates are structured, numbers are
//! numbers and booleans are booleans. Providers translate to and from their
//! own wire representations.

pub mod clinical;
pub mod common;
pub mod insurance;
pub mod lab;
pub mod patient;
pub mod payment;

pub use clinical::*;
pub use common::*;
pub use insurance::*;
pub use lab::*;
pub use patient::*;
pub use payment::*;
