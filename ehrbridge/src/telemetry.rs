//! Tracing subscriber initialisation
//!
//! Library code only emits `tracing` events; binaries and tests call
//! [`init_tracing`] once to install a global subscriber.
//!
//! ```rust,ignore
//! use ehrbridge::telemetry::{init_tracing, OutputFormat, TracingConfig};
//!
//! init_tracing(&TracingConfig::builder().json().level("debug").build())?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::EhrError;

/// Output format for tracing logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Configuration for the global tracing subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Directive used when `RUST_LOG` is unset, e.g. `"info"` or
    /// `"ehrbridge_core=debug,info"`.
    pub default_directive: String,
    /// Let `RUST_LOG` override `default_directive`.
    pub respect_env: bool,
    pub output_format: OutputFormat,
    pub with_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_directive: "info".to_string(),
            respect_env: true,
            output_format: OutputFormat::Text,
            with_target: true,
        }
    }
}

impl TracingConfig {
    pub fn builder() -> TracingConfigBuilder {
        TracingConfigBuilder::default()
    }

    /// Debug level for the ehrbridge crates, info elsewhere.
    pub fn debug() -> Self {
        Self {
            default_directive: "ehrbridge=debug,ehrbridge_core=debug,ehrbridge_provider_athena=debug,info"
                .to_string(),
            ..Self::default()
        }
    }

    /// JSON output at warn level, for log shippers.
    pub fn production() -> Self {
        Self {
            default_directive: "warn".to_string(),
            output_format: OutputFormat::Json,
            ..Self::default()
        }
    }

    fn env_filter(&self) -> Result<EnvFilter, EhrError> {
        let fallback = || {
            EnvFilter::try_new(&self.default_directive).map_err(|e| {
                EhrError::invalid_argument(format!(
                    "invalid tracing directive {:?}: {e}",
                    self.default_directive
                ))
            })
        };
        if self.respect_env {
            match EnvFilter::try_from_default_env() {
                Ok(filter) => Ok(filter),
                Err(_) => fallback(),
            }
        } else {
            fallback()
        }
    }
}

#[derive(Debug, Default)]
pub struct TracingConfigBuilder {
    default_directive: Option<String>,
    respect_env: Option<bool>,
    output_format: Option<OutputFormat>,
    with_target: Option<bool>,
}

impl TracingConfigBuilder {
    pub fn level(mut self, directive: impl Into<String>) -> Self {
        self.default_directive = Some(directive.into());
        self
    }

    pub fn respect_env(mut self, respect: bool) -> Self {
        self.respect_env = Some(respect);
        self
    }

    pub fn json(mut self) -> Self {
        self.output_format = Some(OutputFormat::Json);
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = Some(enabled);
        self
    }

    pub fn build(self) -> TracingConfig {
        let defaults = TracingConfig::default();
        TracingConfig {
            default_directive: self.default_directive.unwrap_or(defaults.default_directive),
            respect_env: self.respect_env.unwrap_or(defaults.respect_env),
            output_format: self.output_format.unwrap_or(defaults.output_format),
            with_target: self.with_target.unwrap_or(defaults.with_target),
        }
    }
}

/// Install the global subscriber.
///
/// Fails with `Internal` when a global subscriber is already installed and
/// with `InvalidArgument` when the directive does not parse.
pub fn init_tracing(config: &TracingConfig) -> Result<(), EhrError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target);

    let result = match config.output_format {
        OutputFormat::Text => builder.try_init(),
        OutputFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| EhrError::internal(format!("failed to initialise tracing: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Code;

    #[test]
    fn builder_falls_back_to_defaults() {
        let config = TracingConfig::builder().json().build();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.default_directive, "info");
        assert!(config.respect_env);
    }

    #[test]
    fn bad_directive_is_invalid_argument() {
        let config = TracingConfig::builder()
            .level("ehrbridge=loud")
            .respect_env(false)
            .build();
        let err = init_tracing(&config).unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
    }

    #[test]
    fn second_install_is_an_error() {
        let config = TracingConfig::builder().respect_env(false).build();
        let _ = init_tracing(&config);
        let err = init_tracing(&config).unwrap_err();
        assert_eq!(err.code(), Code::Internal);
    }
}
