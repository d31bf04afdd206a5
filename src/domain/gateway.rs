//! Request and result types exchanged with an external payment gateway.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeRequest {
    pub amount: i64,
    pub currency: String,
    pub source: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Charge {
    pub id: String,
    pub status: String,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Refund {
    pub id: String,
    pub charge: String,
    pub status: String,
    pub amount: i64,
}

/// `amount` and `currency` describe what the caller asked for. A gateway that
/// bills a preconfigured price reports the billed amount on [`Subscription`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionRequest {
    pub customer_name: String,
    pub email: Option<String>,
    pub source: String,
    pub amount: i64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub status: String,
    /// Amount billed per period, when the gateway reports it.
    #[serde(default)]
    pub amount: Option<i64>,
}
