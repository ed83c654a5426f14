mod types;

pub use types::{RelayReply, RelayRequest};

use crate::{Error, Result, config::ClientConfig};
use tracing::debug;

/// Talks to a running relay over `POST /api/interpret`.
pub struct RelayClient {
    http: reqwest::Client,
    backend_url: String,
    endpoint: String,
}

impl RelayClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            backend_url: config.backend_url.clone(),
            endpoint: config.interpret_url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits `dream_text` and returns the interpretation.
    ///
    /// Blank text is refused without a request. The relay answering with
    /// anything but `success: true` is [`Error::Rejected`]; not reaching it,
    /// or getting a body that is not JSON, is [`Error::Unreachable`].
    pub async fn interpret(&self, dream_text: &str) -> Result<String> {
        if dream_text.trim().is_empty() {
            return Err(Error::MissingInput);
        }

        debug!("Submitting dream to {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&RelayRequest { dream_text })
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        let reply: RelayReply = response.json().await.map_err(|e| self.unreachable(e))?;

        match reply {
            RelayReply {
                success: true,
                interpretation: Some(interpretation),
                ..
            } => Ok(interpretation),
            RelayReply {
                error: Some(error), ..
            } => Err(Error::rejected(format!("Error interpreting dream: {}", error))),
            _ => Err(Error::rejected("Error interpreting dream")),
        }
    }

    fn unreachable(&self, e: reqwest::Error) -> Error {
        Error::Unreachable {
            backend_url: self.backend_url.clone(),
            reason: e.to_string(),
        }
    }
}
