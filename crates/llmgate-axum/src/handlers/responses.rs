//! Generic model response handler.

use axum::Json;
use axum::extract::State;
use tracing::debug;

use crate::dto::{ResponseOutput, ResponseRequest};
use crate::error::HttpError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// Generate a model response through the provider's Responses API.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ResponseRequest>,
) -> Result<Json<ResponseOutput>, HttpError> {
    debug!("POST /responses");
    let output = state.gateway.create_response(req.input, req.model).await?;
    Ok(Json(ResponseOutput {
        response: output.text,
        response_id: output.response_id,
    }))
}
