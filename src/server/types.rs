use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct InterpretRequest {
    #[serde(rename = "dreamText", default)]
    pub dream_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InterpretResponse {
    pub success: bool,
    pub interpretation: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
