use std::sync::Mutex;

use async_trait::async_trait;

use super::CarrierProvider;
use crate::models::{Call, Contact, Sms};

const CARRIER_NAME: &str = "tmobile";

#[derive(Default)]
pub struct TMobile {
    dialed: Mutex<Option<Contact>>,
}

impl TMobile {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarrierProvider for TMobile {
    async fn dial_contact(&self, contact: &Contact) -> anyhow::Result<()> {
        tracing::debug!(carrier = CARRIER_NAME, number = %contact.number, "dialing contact");
        let mut dialed = self
            .dialed
            .lock()
            .map_err(|_| anyhow::anyhow!("T-Mobile dial state poisoned"))?;
        *dialed = Some(contact.clone());
        Ok(())
    }

    async fn make_call(&self) -> anyhow::Result<Call> {
        let contact = self
            .dialed
            .lock()
            .map_err(|_| anyhow::anyhow!("T-Mobile dial state poisoned"))?
            .take()
            .ok_or_else(|| anyhow::anyhow!("T-Mobile: no contact dialed"))?;

        tracing::info!(carrier = CARRIER_NAME, contact = %contact.name, "placing call");
        Ok(Call::new(CARRIER_NAME, contact))
    }

    async fn send_sms(&self, number: &str, body: &str) -> anyhow::Result<Sms> {
        tracing::info!(carrier = CARRIER_NAME, %number, chars = body.chars().count(), "sending SMS");
        Ok(Sms::new("200", format!("T-Mobile queued message to {number}")))
    }
}
