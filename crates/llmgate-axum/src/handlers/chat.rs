//! Chat completion handler.

use axum::Json;
use axum::extract::State;
use tracing::debug;

use crate::dto::{ChatRequest, ChatResponse};
use crate::error::HttpError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// Forward the prompt to the provider and return the model's reply.
pub async fn complete(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ChatRequest>,
) -> Result<Json<ChatResponse>, HttpError> {
    debug!("POST /chat/complete");
    let response = state.gateway.complete_chat(req.prompt, req.model).await?;
    Ok(Json(ChatResponse { response }))
}
