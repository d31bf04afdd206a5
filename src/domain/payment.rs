use crate::error::PaymentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    #[default]
    Online,
    Offline,
}

impl FromStr for PaymentType {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "online" => Ok(PaymentType::Online),
            "offline" => Ok(PaymentType::Offline),
            _ => Err(PaymentError::InvalidPaymentType(s.to_string())),
        }
    }
}

/// A payment request. `amount` is expressed in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentData {
    pub amount: i64,
    pub source: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default, rename = "type")]
    pub payment_type: PaymentType,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl PaymentData {
    pub fn new(amount: i64, source: impl Into<String>) -> Self {
        Self {
            amount,
            source: source.into(),
            currency: default_currency(),
            payment_type: PaymentType::Online,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_type(mut self, payment_type: PaymentType) -> Self {
        self.payment_type = payment_type;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Pending,
    Failure,
}

impl PaymentStatus {
    /// Maps a gateway-reported status string onto the outcome of an operation.
    pub fn from_gateway(status: &str) -> Self {
        match status {
            "succeeded" | "active" => PaymentStatus::Success,
            "pending" | "incomplete" => PaymentStatus::Pending,
            _ => PaymentStatus::Failure,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Success => f.write_str("success"),
            PaymentStatus::Pending => f.write_str("pending"),
            PaymentStatus::Failure => f.write_str("failure"),
        }
    }
}

/// Outcome of a charge, refund or recurring setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub status: PaymentStatus,
    pub amount: i64,
    pub transaction_id: Option<String>,
    pub message: String,
}

impl PaymentResponse {
    pub fn success(
        amount: i64,
        transaction_id: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status: PaymentStatus::Success,
            amount,
            transaction_id,
            message: message.into(),
        }
    }
}
