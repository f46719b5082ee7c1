use std::sync::{Arc, Mutex};

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use carrier_mobile::config::AppConfig;
use carrier_mobile::db;
use carrier_mobile::mobile::Mobile;
use carrier_mobile::services::carriers;
use carrier_mobile::services::directory::SqliteContactDirectory;
use carrier_mobile::services::tracking::HttpSmsTracker;
use carrier_mobile::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = Arc::new(Mutex::new(db::init_db(&config.database_url)?));

    let provider = carriers::carrier_from_name(&config.carrier)?;
    tracing::info!("using carrier: {}", config.carrier);

    let directory = Arc::new(SqliteContactDirectory::new(Arc::clone(&conn)));
    let mobile = Mobile::new(provider, directory);

    tracing::info!("SMS tracker endpoint: {}", config.sms_tracker_url);
    let tracker = HttpSmsTracker::new(config.sms_tracker_url.clone());

    let state = Arc::new(AppState {
        db: conn,
        config: config.clone(),
        mobile,
        tracker: Box::new(tracker),
    });

    let app = carrier_mobile::router(state).layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
