use anyhow::Context;
use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::models::Sms;

/// Sends a text through a remote endpoint and reports its tracking result.
#[async_trait]
pub trait SmsTracker: Send + Sync {
    async fn send_and_track(&self, number: &str, message: &str) -> anyhow::Result<Sms>;
}

#[derive(Serialize)]
struct TrackRequest<'a> {
    number: &'a str,
    message: &'a str,
}

#[derive(Deserialize)]
struct TrackResponse {
    code: serde_json::Value,
    msg: String,
}

impl TrackResponse {
    // `code` arrives as either a JSON number or a string.
    fn into_sms(self) -> Sms {
        let code = match self.code {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        Sms::new(code, self.msg)
    }
}

pub struct HttpSmsTracker {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSmsTracker {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Resolves `send-sms` against the base URL the way a browser would:
    /// a base without a trailing slash has its last segment replaced.
    fn endpoint(&self) -> anyhow::Result<Url> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join("send-sms"))
            .with_context(|| format!("invalid SMS tracker URL: {}", self.base_url))
    }
}

#[async_trait]
impl SmsTracker for HttpSmsTracker {
    async fn send_and_track(&self, number: &str, message: &str) -> anyhow::Result<Sms> {
        let url = self.endpoint()?;
        tracing::debug!(%url, %number, "forwarding SMS to tracker");

        let resp: TrackResponse = self
            .client
            .post(url)
            .json(&TrackRequest { number, message })
            .send()
            .await
            .context("failed to reach SMS tracker")?
            .error_for_status()
            .context("SMS tracker returned error")?
            .json()
            .await
            .context("failed to parse SMS tracker response")?;

        Ok(resp.into_sms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_against_base() {
        let endpoint = |base: &str| {
            HttpSmsTracker::new(base.to_string())
                .endpoint()
                .unwrap()
                .to_string()
        };

        assert_eq!(
            endpoint("http://demo1469828.mockable.io/"),
            "http://demo1469828.mockable.io/send-sms"
        );
        assert_eq!(endpoint("http://localhost:8080"), "http://localhost:8080/send-sms");
        assert_eq!(endpoint("http://h/api"), "http://h/send-sms");
        assert_eq!(endpoint("http://h/api/"), "http://h/api/send-sms");
    }

    #[test]
    fn test_endpoint_rejects_invalid_base() {
        let err = HttpSmsTracker::new("not a url".to_string())
            .endpoint()
            .unwrap_err();
        assert!(err.to_string().contains("invalid SMS tracker URL"));
    }

    #[test]
    fn test_numeric_code_maps_to_string() {
        let resp: TrackResponse =
            serde_json::from_str(r#"{"code":200,"msg":"Message sent"}"#).unwrap();
        let sms = resp.into_sms();
        assert_eq!(sms, Sms::new("200", "Message sent"));
    }
}
