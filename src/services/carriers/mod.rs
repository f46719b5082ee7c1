pub mod tmobile;
pub mod verizon;

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{Call, Contact, Sms};

pub use tmobile::TMobile;
pub use verizon::Verizon;

/// A telephony backend the [`Mobile`](crate::mobile::Mobile) facade can
/// delegate to.
///
/// `dial_contact` prepares the carrier for the next `make_call`; the two are
/// always invoked in that order for a single call.
#[async_trait]
pub trait CarrierProvider: Send + Sync {
    async fn dial_contact(&self, contact: &Contact) -> anyhow::Result<()>;

    async fn make_call(&self) -> anyhow::Result<Call>;

    async fn send_sms(&self, number: &str, body: &str) -> anyhow::Result<Sms>;
}

/// Resolves a carrier by its configured name.
pub fn carrier_from_name(name: &str) -> anyhow::Result<Arc<dyn CarrierProvider>> {
    match name.trim().to_lowercase().as_str() {
        "tmobile" | "t-mobile" => Ok(Arc::new(TMobile::new())),
        "verizon" => Ok(Arc::new(Verizon::new())),
        other => anyhow::bail!("unknown carrier: {other:?} (expected tmobile or verizon)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrier_from_name() {
        assert!(carrier_from_name("tmobile").is_ok());
        assert!(carrier_from_name("T-Mobile").is_ok());
        assert!(carrier_from_name(" Verizon ").is_ok());
    }

    #[test]
    fn test_carrier_from_unknown_name() {
        let err = carrier_from_name("sprint").err().unwrap();
        assert!(err.to_string().contains("sprint"));
    }
}
