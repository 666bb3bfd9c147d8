use crate::core::sequence::Sequence;
use crate::engine::config::PredictionConfig;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid prediction endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("Network error while contacting the prediction service: {0}")]
    Network(#[source] reqwest::Error),
    #[error("Prediction service returned status {status}")]
    Service { status: StatusCode },
    #[error("Failed to decode the prediction response as text: {0}")]
    Decode(#[source] reqwest::Error),
}

/// The seam between the session and the remote folding service. Lets tests
/// drive a [`super::session::PredictionSession`] without network access.
#[allow(async_fn_in_trait)]
pub trait StructurePredictor {
    /// Submits a sequence and returns the raw structure payload text.
    async fn predict(&self, sequence: &Sequence) -> Result<String, ClientError>;
}

/// Client for the ESM Atlas fold API.
///
/// One POST per prediction: the raw sequence text goes out as an
/// `application/x-www-form-urlencoded` body and the response body is the
/// predicted structure in PDB text. The request future is cancellable by
/// dropping it, and the whole call is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct EsmAtlasClient {
    http: reqwest::Client,
    endpoint: reqwest::Url,
}

impl EsmAtlasClient {
    pub fn new(config: &PredictionConfig) -> Result<Self, ClientError> {
        let endpoint =
            config
                .endpoint
                .parse::<reqwest::Url>()
                .map_err(|e| ClientError::InvalidEndpoint {
                    endpoint: config.endpoint.clone(),
                    reason: e.to_string(),
                })?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Network)?;
        debug!("Prediction client initialized for {}", endpoint);
        Ok(Self { http, endpoint })
    }
}

impl StructurePredictor for EsmAtlasClient {
    async fn predict(&self, sequence: &Sequence) -> Result<String, ClientError> {
        info!(
            "Submitting {} residue(s) to {}",
            sequence.len(),
            self.endpoint
        );
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(sequence.as_str().to_owned())
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Service { status });
        }

        let payload = response.text().await.map_err(ClientError::Decode)?;
        debug!("Received {} bytes of structure payload", payload.len());
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::PredictionConfigBuilder;

    #[test]
    fn client_builds_from_default_config() {
        let config = PredictionConfigBuilder::new().build().unwrap();
        assert!(EsmAtlasClient::new(&config).is_ok());
    }

    #[test]
    fn malformed_endpoint_is_rejected() {
        let config = PredictionConfigBuilder::new()
            .endpoint("not a url")
            .build()
            .unwrap();
        let err = EsmAtlasClient::new(&config).unwrap_err();
        assert!(matches!(err, ClientError::InvalidEndpoint { .. }));
    }
}
