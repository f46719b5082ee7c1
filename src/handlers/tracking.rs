use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Sms;
use crate::state::AppState;

// POST /api/sms/track
#[derive(Deserialize)]
pub struct TrackRequest {
    pub number: String,
    pub message: String,
}

pub async fn track_sms(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TrackRequest>,
) -> Result<Json<Sms>, AppError> {
    let sms = state
        .tracker
        .send_and_track(&payload.number, &payload.message)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, number = %payload.number, "SMS tracking failed");
            AppError::Tracking(format!("{e:#}"))
        })?;

    tracing::info!(number = %payload.number, code = %sms.code, "SMS tracked");
    Ok(Json(sms))
}
