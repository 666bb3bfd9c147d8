use crate::cli::PredictArgs;
use crate::error::{CliError, Result};
use foldcast::engine::config::{PredictionConfig, PredictionConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Optional TOML settings file. Every field may be omitted; CLI flags win
/// over file values, file values win over the built-in defaults.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub endpoint: Option<String>,
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("failed to parse '{}': {}", path.display(), e))
        })?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}

pub fn build_prediction_config(args: &PredictArgs) -> Result<PredictionConfig> {
    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let mut builder = PredictionConfigBuilder::new();
    if let Some(endpoint) = args.endpoint.clone().or(file_config.endpoint) {
        builder = builder.endpoint(endpoint);
    }
    if let Some(secs) = args.timeout.or(file_config.timeout_secs) {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldcast::engine::config::DEFAULT_ENDPOINT;
    use std::io::Write;

    fn predict_args() -> PredictArgs {
        PredictArgs {
            sequence: Some("ACDE".to_string()),
            input: None,
            example: false,
            output: "predicted.pdb".into(),
            no_output: false,
            print_payload: false,
            json: false,
            endpoint: None,
            timeout: None,
            config: None,
        }
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let config = build_prediction_config(&predict_args()).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = \"http://localhost:9000/fold\"").unwrap();
        writeln!(file, "timeout-secs = 42").unwrap();

        let mut args = predict_args();
        args.config = Some(file.path().to_path_buf());
        let config = build_prediction_config(&args).unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/fold");
        assert_eq!(config.timeout, Duration::from_secs(42));
    }

    #[test]
    fn cli_flags_win_over_file_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = \"http://localhost:9000/fold\"").unwrap();

        let mut args = predict_args();
        args.config = Some(file.path().to_path_buf());
        args.endpoint = Some("http://localhost:7000/fold".to_string());
        args.timeout = Some(7);
        let config = build_prediction_config(&args).unwrap();
        assert_eq!(config.endpoint, "http://localhost:7000/fold");
        assert_eq!(config.timeout, Duration::from_secs(7));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpont = \"typo\"").unwrap();

        let mut args = predict_args();
        args.config = Some(file.path().to_path_buf());
        let err = build_prediction_config(&args).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
