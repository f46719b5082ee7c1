use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Call, Sms};
use crate::state::AppState;

// POST /api/call
#[derive(Deserialize)]
pub struct CallRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize)]
pub struct CallResponse {
    call: Option<Call>,
}

pub async fn make_call(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CallRequest>,
) -> Result<Json<CallResponse>, AppError> {
    let call = state.mobile.make_call_by_name(&payload.name).await?;
    Ok(Json(CallResponse { call }))
}

// POST /api/sms
#[derive(Deserialize)]
pub struct SmsRequest {
    pub number: Option<String>,
    pub body: Option<String>,
}

pub async fn send_sms(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SmsRequest>,
) -> Result<Json<Sms>, AppError> {
    let sms = state
        .mobile
        .send_sms(payload.number.as_deref(), payload.body.as_deref())
        .await?;
    Ok(Json(sms))
}
