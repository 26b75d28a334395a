//! Embedding handler.

use axum::Json;
use axum::extract::State;
use tracing::debug;

use crate::dto::{EmbeddingRequest, EmbeddingResponse};
use crate::error::HttpError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// Create an embedding for the provided text.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<EmbeddingRequest>,
) -> Result<Json<EmbeddingResponse>, HttpError> {
    debug!("POST /embeddings");
    let embedding = state.gateway.create_embedding(req.text, req.model).await?;
    Ok(Json(EmbeddingResponse { embedding }))
}
