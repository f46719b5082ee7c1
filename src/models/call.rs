use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Contact;

/// A call placed by a carrier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub id: Uuid,
    pub carrier: String,
    pub contact: Contact,
    pub placed_at: DateTime<Utc>,
}

impl Call {
    pub fn new(carrier: &str, contact: Contact) -> Self {
        Self {
            id: Uuid::new_v4(),
            carrier: carrier.to_string(),
            contact,
            placed_at: Utc::now(),
        }
    }
}
