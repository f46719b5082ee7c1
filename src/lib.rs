pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod mobile;
pub mod models;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/call", post(handlers::mobile::make_call))
        .route("/api/sms", post(handlers::mobile::send_sms))
        .route("/api/sms/track", post(handlers::tracking::track_sms))
        .route(
            "/api/contacts",
            get(handlers::contacts::list_contacts).post(handlers::contacts::upsert_contact),
        )
        .route(
            "/api/contacts/:name",
            delete(handlers::contacts::delete_contact),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
