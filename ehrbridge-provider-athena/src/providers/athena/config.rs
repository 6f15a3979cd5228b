//! athena provider configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EhrError;
use ehrbridge_core::types::HttpConfig;

/// Response header carrying athena's remaining request quota.
pub const DEFAULT_RATE_LIMIT_HEADER: &str = ehrbridge_core::defaults::telemetry::RATE_LIMIT_HEADER;
/// Gauge name the remaining quota is reported under.
pub const DEFAULT_RATE_LIMIT_METRIC: &str = "athena.ratelimit.remaining";
/// Deadline applied to the insurance eligibility trigger.
pub const DEFAULT_ELIGIBILITY_CHECK_TIMEOUT: Duration = Duration::from_secs(120);

/// athena configuration.
///
/// Every request is sent to `{base_url}/{practice_id}/...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthenaConfig {
    pub base_url: String,
    pub practice_id: String,
    pub rate_limit_header: String,
    pub rate_limit_metric: String,
    pub enable_insurance_eligibility_check: bool,
    #[serde(with = "duration_secs")]
    pub insurance_eligibility_check_timeout: Duration,
    #[serde(default)]
    pub http: HttpConfig,
}

impl AthenaConfig {
    pub fn new(base_url: impl Into<String>, practice_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            practice_id: practice_id.into(),
            rate_limit_header: DEFAULT_RATE_LIMIT_HEADER.to_string(),
            rate_limit_metric: DEFAULT_RATE_LIMIT_METRIC.to_string(),
            enable_insurance_eligibility_check: false,
            insurance_eligibility_check_timeout: DEFAULT_ELIGIBILITY_CHECK_TIMEOUT,
            http: HttpConfig::default(),
        }
    }

    pub fn builder() -> AthenaConfigBuilder {
        AthenaConfigBuilder::default()
    }

    /// Read the configuration from `ATHENA_*` environment variables.
    ///
    /// `ATHENA_BASE_URL` and `ATHENA_PRACTICE_ID` are required;
    /// `ATHENA_ENABLE_INSURANCE_ELIGIBILITY_CHECK` and
    /// `ATHENA_INSURANCE_ELIGIBILITY_CHECK_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self, EhrError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EhrError> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| EhrError::invalid_argument(format!("{key} is not set")))
        };

        let mut builder = Self::builder()
            .base_url(required("ATHENA_BASE_URL")?)
            .practice_id(required("ATHENA_PRACTICE_ID")?);

        if let Some(raw) = lookup("ATHENA_ENABLE_INSURANCE_ELIGIBILITY_CHECK") {
            let enabled = raw.trim().parse::<bool>().map_err(|_| {
                EhrError::invalid_argument(format!(
                    "ATHENA_ENABLE_INSURANCE_ELIGIBILITY_CHECK must be true or false, got {raw:?}"
                ))
            })?;
            builder = builder.enable_insurance_eligibility_check(enabled);
        }
        if let Some(raw) = lookup("ATHENA_INSURANCE_ELIGIBILITY_CHECK_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                EhrError::invalid_argument(format!(
                    "ATHENA_INSURANCE_ELIGIBILITY_CHECK_TIMEOUT_SECS must be a number of seconds, got {raw:?}"
                ))
            })?;
            builder = builder.insurance_eligibility_check_timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    /// Practice-scoped base URL every operation path is joined onto.
    pub fn practice_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.practice_id.trim_matches('/')
        )
    }
}

/// Builder for [`AthenaConfig`].
#[derive(Debug, Clone, Default)]
pub struct AthenaConfigBuilder {
    base_url: Option<String>,
    practice_id: Option<String>,
    rate_limit_header: Option<String>,
    rate_limit_metric: Option<String>,
    enable_insurance_eligibility_check: bool,
    insurance_eligibility_check_timeout: Option<Duration>,
    http: Option<HttpConfig>,
}

impl AthenaConfigBuilder {
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn practice_id<S: Into<String>>(mut self, practice_id: S) -> Self {
        self.practice_id = Some(practice_id.into());
        self
    }

    pub fn rate_limit_header<S: Into<String>>(mut self, header: S) -> Self {
        self.rate_limit_header = Some(header.into());
        self
    }

    pub fn rate_limit_metric<S: Into<String>>(mut self, metric: S) -> Self {
        self.rate_limit_metric = Some(metric.into());
        self
    }

    pub fn enable_insurance_eligibility_check(mut self, enabled: bool) -> Self {
        self.enable_insurance_eligibility_check = enabled;
        self
    }

    pub fn insurance_eligibility_check_timeout(mut self, timeout: Duration) -> Self {
        self.insurance_eligibility_check_timeout = Some(timeout);
        self
    }

    pub fn http_config(mut self, http: HttpConfig) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<AthenaConfig, EhrError> {
        let base_url = self
            .base_url
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| EhrError::invalid_argument("athena base url is required"))?;
        let practice_id = self
            .practice_id
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| EhrError::invalid_argument("athena practice id is required"))?;

        let mut config = AthenaConfig::new(base_url, practice_id);
        if let Some(header) = self.rate_limit_header {
            config.rate_limit_header = header;
        }
        if let Some(metric) = self.rate_limit_metric {
            config.rate_limit_metric = metric;
        }
        config.enable_insurance_eligibility_check = self.enable_insurance_eligibility_check;
        if let Some(timeout) = self.insurance_eligibility_check_timeout {
            config.insurance_eligibility_check_timeout = timeout;
        }
        if let Some(http) = self.http {
            config.http = http;
        }
        Ok(config)
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
