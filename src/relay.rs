use crate::{Error, Result, interpreter::InterpretationService};
use std::sync::Arc;
use tracing::{info, warn};

/// Substitute interpretation used whenever the service cannot answer.
/// Depends only on `text`.
pub fn fallback_interpretation(text: &str) -> String {
    format!(
        "[Fallback Mode] The AI service is currently unavailable. \n\n\
         Here is a simulated interpretation for: \"{}\". \n\n\
         Your dream suggests a strong desire for connectivity and integration, \
         mirroring the system's attempt to connect to its AI core.",
        text
    )
}

/// Forwards dream text to an [`InterpretationService`] and masks every
/// downstream failure behind [`fallback_interpretation`].
#[derive(Clone)]
pub struct Relay {
    service: Arc<dyn InterpretationService>,
}

impl Relay {
    pub fn new(service: Arc<dyn InterpretationService>) -> Self {
        Self { service }
    }

    /// Returns the service's interpretation verbatim, or the fallback text.
    ///
    /// The only error is [`Error::MissingInput`] for empty text, in which case
    /// the service is not contacted.
    pub async fn interpret(&self, dream_text: &str) -> Result<String> {
        if dream_text.is_empty() {
            return Err(Error::MissingInput);
        }

        info!("Relaying dream text ({} bytes)", dream_text.len());

        match self.service.interpret(dream_text).await {
            Ok(interpretation) => Ok(interpretation),
            Err(e) => {
                warn!("Interpretation service error, using fallback: {}", e);
                Ok(fallback_interpretation(dream_text))
            }
        }
    }
}
