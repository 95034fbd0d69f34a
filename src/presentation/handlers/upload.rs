use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::Instrument;

use crate::domain::{TranslationRequest, TranslationResult};
use crate::infrastructure::observability::sanitize_transcript;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::languages::language_map;

pub const ORIGINAL_HEADER: HeaderName = HeaderName::from_static("x-original");
pub const TRANSLATION_HEADER: HeaderName = HeaderName::from_static("x-translation");

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_target")]
    pub target: String,
}

fn default_source() -> String {
    "en".to_string()
}

fn default_target() -> String {
    "es".to_string()
}

pub async fn upload_info_handler() -> impl IntoResponse {
    Json(json!({
        "available_languages": language_map(),
        "usage": {
            "endpoint": "/upload",
            "method": "POST",
            "parameters": {
                "source": "Language code for input (e.g., en or en-US)",
                "target": "Language code for output (e.g., es or es-ES)"
            },
            "content-type": "audio/wav",
            "example": "/upload?source=en&target=es"
        }
    }))
}

#[tracing::instrument(skip(state, body), fields(bytes = body.len()))]
pub async fn upload_handler(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> Response {
    tracing::debug!(source = %query.source, target = %query.target, "Received audio upload");

    let request = TranslationRequest::new(body, query.source, query.target);
    let orchestrator = Arc::clone(&state.orchestrator);
    let cancel = state.shutdown.clone();

    // Spawned so a dropped connection cannot abort the pipeline before cleanup.
    let task = tokio::spawn(
        async move { orchestrator.process_until(request, cancel).await }.in_current_span(),
    );

    match task.await {
        Ok(Ok(result)) => audio_response(result),
        Ok(Err(e)) => ApiError::from(e).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Translation pipeline task aborted");
            ApiError::Internal(format!("pipeline task failed: {}", e)).into_response()
        }
    }
}

fn audio_response(result: TranslationResult) -> Response {
    tracing::info!(
        original = %sanitize_transcript(&result.original_text),
        translation = %sanitize_transcript(&result.translated_text),
        "Returning synthesized audio"
    );
    if let Some(warning) = &result.cleanup_warning {
        tracing::warn!(warning = %warning, "Uploaded audio left behind");
    }

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));
    insert_text_header(&mut headers, ORIGINAL_HEADER, &result.original_text);
    insert_text_header(&mut headers, TRANSLATION_HEADER, &result.translated_text);

    (StatusCode::OK, headers, result.audio).into_response()
}

fn insert_text_header(headers: &mut HeaderMap, name: HeaderName, text: &str) {
    match header_value_for_text(text) {
        Some(value) => {
            headers.insert(name, value);
        }
        None => tracing::warn!(header = %name, "Transcript not representable as header value"),
    }
}

/// UTF-8 text as a header value, control characters replaced by spaces.
pub fn header_value_for_text(text: &str) -> Option<HeaderValue> {
    let cleaned: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    HeaderValue::from_bytes(cleaned.trim().as_bytes()).ok()
}
