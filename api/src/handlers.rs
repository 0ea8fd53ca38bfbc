use axum::Json;
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};

use agent_core::models::{AgentRequest, AgentResponse};
use agent_core::reply;

use crate::error::{ApiError, ApiResult};

/// `POST /test` — echoes the transcript and page context back with the
/// fixed demo intent.
pub async fn handle_test(
    WithRejection(Json(body), _): WithRejection<Json<Value>, ApiError>,
) -> ApiResult<Json<AgentResponse>> {
    let request =
        AgentRequest::from_value(body).map_err(|e| ApiError::Validation(e.to_string()))?;
    Ok(Json(reply::respond(request)))
}

/// `GET /health` — liveness check.
pub async fn handle_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
