//! HTTP client for the remote classification service.

use std::time::Duration;

use async_trait::async_trait;
use lb_core::{DelegateConfig, LbError, PassengerInput};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::outcome::{DelegateOutcome, Unavailable};
use crate::traits::Classifier;
use crate::wire::{DelegateRequest, RemotePrediction};

/// Issues one POST per prediction with an explicit timeout. No retries.
#[derive(Debug, Clone)]
pub struct RemoteClassifier {
    http_client: Client,
    endpoint: String,
    timeout: Duration,
}

impl RemoteClassifier {
    pub fn new(config: &DelegateConfig) -> Result<Self, LbError> {
        let timeout = config.timeout();
        let http_client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(concat!("lifeboat/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LbError::Other(anyhow::anyhow!("failed to build HTTP client: {e}")))?;
        Ok(Self { http_client, endpoint: config.endpoint(), timeout })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn request(&self, input: &PassengerInput) -> Result<RemotePrediction, Unavailable> {
        let payload = DelegateRequest::from_input(input);
        debug!(endpoint = %self.endpoint, "calling delegate");

        let response = self.http_client.post(&self.endpoint).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Unavailable::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| Unavailable::Decode(e.to_string()))
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    async fn classify(&self, input: &PassengerInput) -> DelegateOutcome {
        match self.request(input).await {
            Ok(prediction) => {
                info!(model_type = %prediction.model_type, "using remote classifier");
                DelegateOutcome::Success(prediction)
            }
            Err(reason) => {
                warn!(%reason, "remote classifier unavailable, using fallback model");
                DelegateOutcome::Unavailable(reason)
            }
        }
    }
}
