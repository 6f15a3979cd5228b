//! Observability
//!
//! Gauge emission for values the remote system reports in response headers.

pub mod telemetry;

pub use telemetry::{
    GaugeSample, MemoryTelemetrySink, MetricsGaugeSink, NoopTelemetrySink, TelemetrySink,
};
