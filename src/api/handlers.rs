//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::{info, warn};

use super::AppState;
use super::types::ErrorResponse;
use crate::dispatch::{DispatchRequest, DispatchResult};

/// Computes the production plan for the posted request.
///
/// `POST /productionplan` → 200 + plan JSON (`[{"name", "p"}]`)
/// Engine failure → 400 + `ErrorResponse`
pub async fn post_production_plan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DispatchRequest>,
) -> Result<Json<DispatchResult>, (StatusCode, Json<ErrorResponse>)> {
    match state.engine.dispatch(&request) {
        Ok(result) => {
            info!(
                load = result.load,
                plants = result.commitments.len(),
                "production plan computed"
            );
            Ok(Json(result))
        }
        Err(err) => {
            warn!(error = %err, "dispatch rejected");
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            ))
        }
    }
}

/// `GET /health` → 200 `ok`
pub async fn get_health() -> &'static str {
    "ok"
}
