use crate::domain::customer::CustomerData;
use crate::domain::payment::PaymentData;
use crate::error::{PaymentError, Result};

/// Checks customer data before any external call is made.
///
/// Checks run in a fixed order and the first violation is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerValidator;

impl CustomerValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, customer: &CustomerData) -> Result<()> {
        if customer.name.is_empty() {
            return Err(invalid("Invalid customer data: missing name"));
        }
        if !customer.contact_info.has_channel() {
            return Err(invalid("Invalid customer data: missing email or phone"));
        }
        Ok(())
    }
}

/// Checks payment data before any external call is made.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentDataValidator;

impl PaymentDataValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, payment: &PaymentData) -> Result<()> {
        if payment.source.is_empty() {
            return Err(invalid("Invalid payment data: missing source"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> PaymentError {
    tracing::warn!("{}", msg);
    PaymentError::Validation(msg.to_string())
}
