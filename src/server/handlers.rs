use super::types::{ErrorResponse, HealthResponse, InterpretRequest, InterpretResponse};
use crate::{Error, relay::Relay};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
}

impl AppState {
    pub fn new(relay: Relay) -> Self {
        Self { relay }
    }
}

pub async fn index() -> &'static str {
    "Dream Interpreter API is running"
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `POST /api/interpret`. A body that is missing, not JSON, or without a
/// string `dreamText` is treated the same as empty text. A body over the
/// size limit is refused with 413.
pub async fn interpret(
    State(state): State<AppState>,
    payload: Result<Json<InterpretRequest>, JsonRejection>,
) -> Result<Json<InterpretResponse>, ApiError> {
    let dream_text = match payload {
        Ok(Json(request)) => request.dream_text.unwrap_or_default(),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!("Rejected oversized interpret request: {}", rejection);
            return Err((
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            ));
        }
        Err(_) => String::new(),
    };

    match state.relay.interpret(&dream_text).await {
        Ok(interpretation) => {
            info!("Interpretation returned ({} bytes)", interpretation.len());
            Ok(Json(InterpretResponse {
                success: true,
                interpretation,
            }))
        }
        Err(e) => Err(error_response(e)),
    }
}

fn error_response(e: Error) -> ApiError {
    match e {
        Error::MissingInput => {
            info!("Rejected interpret request without dreamText");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: Error::MissingInput.to_string(),
                }),
            )
        }
        e => {
            error!("Failed to process interpret request: {}", e);
            let message = match e {
                Error::Internal(message) => message,
                other => other.to_string(),
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: message }),
            )
        }
    }
}
