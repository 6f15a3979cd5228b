//! Telemetry sinks
//!
//! The pipeline reports at most one gauge per call. Sinks must be safe to
//! call concurrently and must never fail the call that produced the value.

use std::sync::Mutex;

/// Destination for gauge measurements.
pub trait TelemetrySink: Send + Sync {
    fn record_gauge(&self, name: &str, value: f64, tags: &[(&'static str, String)]);
}

/// Forwards gauges to the process-wide `metrics` recorder.
///
/// Without an installed recorder the `metrics` macros are no-ops.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsGaugeSink;

impl TelemetrySink for MetricsGaugeSink {
    fn record_gauge(&self, name: &str, value: f64, tags: &[(&'static str, String)]) {
        let labels: Vec<metrics::Label> = tags
            .iter()
            .map(|(k, v)| metrics::Label::new(*k, v.clone()))
            .collect();
        metrics::gauge!(name.to_owned(), labels).set(value);
    }
}

/// Discards every measurement.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record_gauge(&self, _name: &str, _value: f64, _tags: &[(&'static str, String)]) {}
}

/// One recorded measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSample {
    pub name: String,
    pub value: f64,
    pub tags: Vec<(&'static str, String)>,
}

/// In-memory sink, mainly for tests and local debugging.
#[derive(Debug, Default)]
pub struct MemoryTelemetrySink {
    samples: Mutex<Vec<GaugeSample>>,
}

impl MemoryTelemetrySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn samples(&self) -> Vec<GaugeSample> {
        match self.samples.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl TelemetrySink for MemoryTelemetrySink {
    fn record_gauge(&self, name: &str, value: f64, tags: &[(&'static str, String)]) {
        let sample = GaugeSample {
            name: name.to_string(),
            value,
            tags: tags.to_vec(),
        };
        match self.samples.lock() {
            Ok(mut guard) => guard.push(sample),
            Err(poisoned) => poisoned.into_inner().push(sample),
        }
    }
}
