use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use crate::errors::CostDashError;

impl IntoResponse for CostDashError {
    fn into_response(self) -> axum::response::Response {
        // Failures reaching or reading the upstream report are gateway errors
        let status = match &self {
            CostDashError::NotFound(_)
            | CostDashError::Network(_)
            | CostDashError::Parse(_)
            | CostDashError::Validation(_) => StatusCode::BAD_GATEWAY,
            CostDashError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
