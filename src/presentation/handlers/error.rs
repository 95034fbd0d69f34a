use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{PipelineError, PipelineErrorKind};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<&'static str>,
}

pub fn status_for(kind: PipelineErrorKind) -> StatusCode {
    match kind {
        PipelineErrorKind::EmptyAudio | PipelineErrorKind::NoTranscript => StatusCode::BAD_REQUEST,
        PipelineErrorKind::TranscriptionTimeout => StatusCode::GATEWAY_TIMEOUT,
        PipelineErrorKind::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
        PipelineErrorKind::Storage
        | PipelineErrorKind::Transcription
        | PipelineErrorKind::TranscriptionFailed
        | PipelineErrorKind::Translation
        | PipelineErrorKind::Synthesis => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Failure surfaced at the request boundary.
#[derive(Debug)]
pub enum ApiError {
    Pipeline(PipelineError),
    Internal(String),
}

impl From<PipelineError> for ApiError {
    fn from(e: PipelineError) -> Self {
        ApiError::Pipeline(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Pipeline(e) => (
                status_for(e.kind()),
                ErrorResponse {
                    error: e.to_string(),
                    kind: e.kind().as_str(),
                    stage: Some(e.stage().as_str()),
                },
            ),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: message,
                    kind: "INTERNAL",
                    stage: None,
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}
