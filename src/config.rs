use std::env;

pub const DEFAULT_SMS_TRACKER_URL: &str = "http://demo1469828.mockable.io/";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub admin_token: String,
    pub carrier: String,
    pub sms_tracker_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "mobile.db".to_string()),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| "changeme".to_string()),
            carrier: env::var("CARRIER").unwrap_or_else(|_| "tmobile".to_string()),
            sms_tracker_url: env::var("SMS_TRACKER_URL")
                .unwrap_or_else(|_| DEFAULT_SMS_TRACKER_URL.to_string()),
        }
    }
}
