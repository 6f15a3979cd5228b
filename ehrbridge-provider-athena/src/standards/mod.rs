//! Provider wire standards.

pub mod athena;
