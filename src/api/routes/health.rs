use axum::Json;
use crate::api::models::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "costdash",
        version: env!("CARGO_PKG_VERSION"),
        build: option_env!("GIT_HASH"),
        built_at: env!("BUILD_TIMESTAMP"),
    })
}
