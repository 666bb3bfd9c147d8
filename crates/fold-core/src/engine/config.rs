use std::time::Duration;
use thiserror::Error;

/// The public ESM Atlas fold endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.esmatlas.com/foldSequence/v1/pdb/";

/// Folding a long sequence server-side can take minutes; the bound exists so
/// a dead connection cannot block a session forever.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Request timeout must be non-zero")]
    ZeroTimeout,
}

/// Settings for the remote prediction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionConfig {
    /// URL the sequence is POSTed to.
    pub endpoint: String,
    /// Upper bound on the whole request, connect included.
    pub timeout: Duration,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Default)]
pub struct PredictionConfigBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl PredictionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<PredictionConfig, ConfigError> {
        let endpoint = self.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        if endpoint.trim().is_empty() {
            return Err(ConfigError::MissingParameter("endpoint"));
        }
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(PredictionConfig { endpoint, timeout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = PredictionConfigBuilder::new().build().unwrap();
        assert_eq!(config, PredictionConfig::default());
    }

    #[test]
    fn builder_overrides() {
        let config = PredictionConfigBuilder::new()
            .endpoint("http://localhost:8080/fold")
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/fold");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let err = PredictionConfigBuilder::new().endpoint("  ").build().unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("endpoint"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = PredictionConfigBuilder::new()
            .timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroTimeout);
    }
}
