use crate::domain::customer::CustomerData;
use crate::domain::ports::{Channel, Notifier};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;

pub const SENDER: &str = "no-reply@example.com";
pub const SUBJECT: &str = "Payment Confirmation";
pub const BODY: &str = "Thank you for your payment.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Sends payment confirmations by email.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotifier;

impl EmailNotifier {
    pub fn new() -> Self {
        Self
    }

    /// Builds the confirmation for a customer; requires an email address.
    pub fn compose(&self, customer: &CustomerData) -> Result<EmailMessage> {
        let to = customer
            .contact_info
            .email()
            .ok_or_else(|| PaymentError::NoContactChannel(customer.name.clone()))?;

        Ok(EmailMessage {
            from: SENDER.to_string(),
            to: to.to_string(),
            subject: SUBJECT.to_string(),
            body: BODY.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    fn channel(&self) -> Channel {
        Channel::Email
    }

    async fn send_confirmation(&self, customer: &CustomerData) -> Result<()> {
        let message = self.compose(customer)?;
        tracing::info!(to = %message.to, subject = %message.subject, "Email sent");
        Ok(())
    }
}
