use std::sync::Mutex;

use async_trait::async_trait;

use super::CarrierProvider;
use crate::models::{Call, Contact, Sms};

const CARRIER_NAME: &str = "verizon";

#[derive(Default)]
pub struct Verizon {
    dialed: Mutex<Option<Contact>>,
}

impl Verizon {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarrierProvider for Verizon {
    async fn dial_contact(&self, contact: &Contact) -> anyhow::Result<()> {
        tracing::debug!(carrier = CARRIER_NAME, number = %contact.number, "dialing contact");
        *self
            .dialed
            .lock()
            .map_err(|_| anyhow::anyhow!("Verizon dial state poisoned"))? = Some(contact.clone());
        Ok(())
    }

    async fn make_call(&self) -> anyhow::Result<Call> {
        let dialed = self
            .dialed
            .lock()
            .map_err(|_| anyhow::anyhow!("Verizon dial state poisoned"))?
            .take();

        match dialed {
            Some(contact) => {
                tracing::info!(carrier = CARRIER_NAME, contact = %contact.name, "placing call");
                Ok(Call::new(CARRIER_NAME, contact))
            }
            None => anyhow::bail!("Verizon: make_call invoked before dial_contact"),
        }
    }

    async fn send_sms(&self, number: &str, body: &str) -> anyhow::Result<Sms> {
        let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
        tracing::info!(carrier = CARRIER_NAME, number = %digits, chars = body.chars().count(), "sending SMS");
        Ok(Sms::new("200", format!("Verizon delivered message to {digits}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_call_after_dial() {
        let carrier = Verizon::new();
        let contact = Contact::new("Jose Bejarano", "948562369");

        carrier.dial_contact(&contact).await.unwrap();
        let call = carrier.make_call().await.unwrap();

        assert_eq!(call.carrier, "verizon");
        assert_eq!(call.contact.number, "948562369");
    }

    #[tokio::test]
    async fn test_call_without_dial_fails() {
        let err = Verizon::new().make_call().await.unwrap_err();
        assert!(err.to_string().contains("before dial_contact"));
    }

    #[tokio::test]
    async fn test_dialed_contact_is_consumed() {
        let carrier = Verizon::new();
        carrier
            .dial_contact(&Contact::new("Ana", "5551234567"))
            .await
            .unwrap();

        let call = carrier.make_call().await.unwrap();
        assert_eq!(call.contact.name, "Ana");
        assert!(carrier.make_call().await.is_err());
    }

    #[tokio::test]
    async fn test_send_sms_strips_formatting() {
        let sms = Verizon::new()
            .send_sms("(948)787-6532", "This is a test message!")
            .await
            .unwrap();
        assert_eq!(sms.code, "200");
        assert!(sms.details.ends_with("9487876532"));
    }
}
