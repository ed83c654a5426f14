use serde::{Deserialize, Serialize};

/// Body sent to the interpretation service.
#[derive(Debug, Serialize)]
pub struct ServiceRequest<'a> {
    pub text: &'a str,
}

/// Body expected back from the interpretation service on success.
#[derive(Debug, Deserialize)]
pub struct ServiceResponse {
    pub interpretation: String,
}
