//! Wire encodings
//!
//! - `wire_values`: flat key/value parameter sets and the record codec
//! - `scalars`: string ↔ typed scalar converters (dates, integers, booleans)
//! - `phone`: phone-number normalisation

pub mod phone;
pub mod scalars;
pub mod wire_values;

pub use wire_values::WireValues;
