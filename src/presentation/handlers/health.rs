use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

pub const SERVICE_BANNER: &str = "Tolk Translate";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn index_handler() -> &'static str {
    SERVICE_BANNER
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}
