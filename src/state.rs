use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::config::AppConfig;
use crate::mobile::Mobile;
use crate::services::tracking::SmsTracker;

pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
    pub config: AppConfig,
    pub mobile: Mobile,
    pub tracker: Box<dyn SmsTracker>,
}
