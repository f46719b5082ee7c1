use std::sync::{Arc, MutexGuard};

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use rusqlite::Connection;
use serde::Deserialize;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::Contact;
use crate::services::directory::is_valid_number;
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

fn internal(e: anyhow::Error) -> AppError {
    match e.downcast::<rusqlite::Error>() {
        Ok(db_err) => AppError::Database(db_err),
        Err(other) => AppError::Internal(format!("{other:#}")),
    }
}

fn lock_db(state: &AppState) -> Result<MutexGuard<'_, Connection>, AppError> {
    state
        .db
        .lock()
        .map_err(|_| AppError::Internal("database lock poisoned".to_string()))
}

// GET /api/contacts
pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Contact>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let contacts = {
        let db = lock_db(&state)?;
        queries::list_contacts(&db).map_err(internal)?
    };
    Ok(Json(contacts))
}

// POST /api/contacts
#[derive(Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub number: String,
}

pub async fn upsert_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<Contact>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let name = payload.name.trim();
    let number = payload.number.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("contact name is required".to_string()));
    }
    if !is_valid_number(number) {
        return Err(AppError::BadRequest(format!("invalid phone number: {number}")));
    }

    let contact = Contact::new(name, number);
    {
        let db = lock_db(&state)?;
        queries::upsert_contact(&db, &contact).map_err(internal)?;
    }

    tracing::info!(name = %contact.name, "contact saved");
    Ok(Json(contact))
}

// DELETE /api/contacts/:name
pub async fn delete_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let deleted = {
        let db = lock_db(&state)?;
        queries::delete_contact(&db, &name).map_err(internal)?
    };
    Ok(Json(serde_json::json!({ "deleted": deleted })))
}
