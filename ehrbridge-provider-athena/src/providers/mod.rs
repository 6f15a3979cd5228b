//! Provider implementations.

pub mod athena;
