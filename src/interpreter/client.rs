use super::types::{ServiceRequest, ServiceResponse};
use crate::{Error, Result, config::InterpreterConfig};
use async_trait::async_trait;
use tracing::debug;

/// Anything that can turn dream text into an interpretation.
///
/// Every failure is reported as [`Error::DownstreamUnavailable`]; callers
/// decide whether to surface or mask it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InterpretationService: Send + Sync {
    async fn interpret(&self, text: &str) -> Result<String>;
}

pub struct HttpInterpreter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpInterpreter {
    pub fn new(config: &InterpreterConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.interpret_url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InterpretationService for HttpInterpreter {
    async fn interpret(&self, text: &str) -> Result<String> {
        debug!("Calling interpretation service at {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ServiceRequest { text })
            .send()
            .await
            .map_err(|e| Error::downstream(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::downstream(format!(
                "service responded with {}: {}",
                status, body
            )));
        }

        let body: ServiceResponse = response
            .json()
            .await
            .map_err(|e| Error::downstream(format!("malformed response: {}", e)))?;

        Ok(body.interpretation)
    }
}
