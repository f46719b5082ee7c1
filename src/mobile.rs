use std::sync::Arc;

use tokio::sync::Mutex;

use crate::errors::MobileError;
use crate::models::{Call, Sms};
use crate::services::carriers::CarrierProvider;
use crate::services::directory::ContactDirectory;

/// Validates call and SMS requests and hands them to a carrier.
///
/// Holds no per-call state; every invocation performs a fresh lookup or
/// validation against the directory. Dial and call on the shared carrier
/// are serialized so concurrent callers never see each other's dial.
#[derive(Clone)]
pub struct Mobile {
    provider: Arc<dyn CarrierProvider>,
    directory: Arc<dyn ContactDirectory>,
    dial_lock: Arc<Mutex<()>>,
}

impl Mobile {
    pub fn new(provider: Arc<dyn CarrierProvider>, directory: Arc<dyn ContactDirectory>) -> Self {
        Self {
            provider,
            directory,
            dial_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Calls the contact registered under `name`.
    ///
    /// Returns `Ok(None)` without touching the directory or carrier when
    /// `name` is empty.
    pub async fn make_call_by_name(&self, name: &str) -> Result<Option<Call>, MobileError> {
        if name.is_empty() {
            return Ok(None);
        }

        let contact = self
            .directory
            .find_by_name(name)
            .await
            .map_err(MobileError::Directory)?
            .ok_or_else(|| MobileError::ContactNotFound(name.to_string()))?;

        let call = {
            let _dialing = self.dial_lock.lock().await;
            self.provider
                .dial_contact(&contact)
                .await
                .map_err(MobileError::Carrier)?;
            self.provider.make_call().await.map_err(MobileError::Carrier)?
        };
        tracing::debug!(contact = %contact.name, call_id = %call.id, "call placed");

        Ok(Some(call))
    }

    pub async fn send_sms(
        &self,
        number: Option<&str>,
        body: Option<&str>,
    ) -> Result<Sms, MobileError> {
        let (Some(number), Some(body)) = (number, body) else {
            return Err(MobileError::MissingArgument);
        };

        let is_valid = self
            .directory
            .validate_number(number)
            .await
            .map_err(MobileError::Directory)?;

        if !is_valid {
            return Err(MobileError::InvalidPhoneNumber(number.to_string()));
        }

        self.provider
            .send_sms(number, body)
            .await
            .map_err(MobileError::Carrier)
    }
}
