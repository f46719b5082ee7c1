use serde::{Deserialize, Serialize};

/// Outcome of sending a text message, either from a carrier or from the
/// remote tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sms {
    pub code: String,
    pub details: String,
}

impl Sms {
    pub fn new(code: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            details: details.into(),
        }
    }
}
