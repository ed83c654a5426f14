use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct RelayRequest<'a> {
    #[serde(rename = "dreamText")]
    pub dream_text: &'a str,
}

/// Any body the relay may answer with: the success shape or the error shape.
#[derive(Debug, Deserialize)]
pub struct RelayReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub interpretation: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
