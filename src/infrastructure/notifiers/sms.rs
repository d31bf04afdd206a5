use crate::domain::customer::CustomerData;
use crate::domain::ports::{Channel, Notifier};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;

pub const TEXT: &str = "Thank you for your payment.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsMessage {
    pub gateway: String,
    pub to: String,
    pub text: String,
}

/// Sends payment confirmations by SMS through a named gateway.
#[derive(Debug, Clone)]
pub struct SmsNotifier {
    gateway: String,
}

impl SmsNotifier {
    pub fn new(gateway: impl Into<String>) -> Self {
        Self {
            gateway: gateway.into(),
        }
    }

    pub fn gateway(&self) -> &str {
        &self.gateway
    }

    pub fn compose(&self, customer: &CustomerData) -> Result<SmsMessage> {
        let to = customer
            .contact_info
            .phone()
            .ok_or_else(|| PaymentError::NoContactChannel(customer.name.clone()))?;

        Ok(SmsMessage {
            gateway: self.gateway.clone(),
            to: to.to_string(),
            text: TEXT.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for SmsNotifier {
    fn channel(&self) -> Channel {
        Channel::Sms
    }

    async fn send_confirmation(&self, customer: &CustomerData) -> Result<()> {
        let message = self.compose(customer)?;
        tracing::info!(gateway = %message.gateway, to = %message.to, "SMS sent");
        Ok(())
    }
}
