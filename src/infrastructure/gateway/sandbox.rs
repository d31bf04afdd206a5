use crate::domain::gateway::{Charge, ChargeRequest, Refund, Subscription, SubscriptionRequest};
use crate::domain::ports::PaymentGateway;
use crate::error::GatewayError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Test tokens that the sandbox always declines, with their decline codes.
const DECLINED_TOKENS: &[(&str, &str, &str)] = &[
    (
        "tok_radarBlock",
        "card_declined",
        "Your card was declined by fraud screening.",
    ),
    ("tok_chargeDeclined", "card_declined", "Your card was declined."),
    (
        "tok_chargeDeclinedInsufficientFunds",
        "insufficient_funds",
        "Your card has insufficient funds.",
    ),
];

const SOURCE_PREFIXES: &[&str] = &["tok_", "pm_", "src_"];

#[derive(Debug, Clone)]
struct SandboxCharge {
    charge: Charge,
    refunded: bool,
}

/// An in-process gateway that mimics a card processor's test mode.
///
/// Successful charges are remembered so refunds can be checked against them.
/// Cloning shares the underlying ledger.
#[derive(Default, Clone)]
pub struct SandboxGateway {
    charges: Arc<RwLock<HashMap<String, SandboxCharge>>>,
}

impl SandboxGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_source(source: &str) -> Result<(), GatewayError> {
        if let Some((_, code, message)) = DECLINED_TOKENS.iter().find(|(t, _, _)| *t == source) {
            return Err(GatewayError::Declined {
                code: code.to_string(),
                message: message.to_string(),
            });
        }
        if !SOURCE_PREFIXES.iter().any(|p| source.starts_with(p)) {
            return Err(GatewayError::InvalidRequest(format!(
                "No such token: '{source}'"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl PaymentGateway for SandboxGateway {
    async fn create_charge(&self, request: ChargeRequest) -> Result<Charge, GatewayError> {
        Self::check_source(&request.source)?;
        if request.amount < 1 {
            return Err(GatewayError::InvalidRequest(
                "Amount must be at least 1 minor unit".to_string(),
            ));
        }

        let charge = Charge {
            id: format!("ch_{}", Uuid::new_v4().simple()),
            status: "succeeded".to_string(),
            amount: request.amount,
        };
        let mut charges = self.charges.write().await;
        charges.insert(
            charge.id.clone(),
            SandboxCharge {
                charge: charge.clone(),
                refunded: false,
            },
        );
        Ok(charge)
    }

    async fn create_refund(&self, charge_id: &str) -> Result<Refund, GatewayError> {
        let mut charges = self.charges.write().await;
        let entry = charges
            .get_mut(charge_id)
            .ok_or_else(|| GatewayError::InvalidRequest(format!("No such charge: '{charge_id}'")))?;

        if entry.refunded {
            return Err(GatewayError::InvalidRequest(format!(
                "Charge {charge_id} has already been refunded"
            )));
        }
        entry.refunded = true;

        Ok(Refund {
            id: format!("re_{}", Uuid::new_v4().simple()),
            charge: charge_id.to_string(),
            status: "succeeded".to_string(),
            amount: entry.charge.amount,
        })
    }

    async fn create_subscription(
        &self,
        request: SubscriptionRequest,
    ) -> Result<Subscription, GatewayError> {
        Self::check_source(&request.source)?;
        Ok(Subscription {
            id: format!("sub_{}", Uuid::new_v4().simple()),
            status: "active".to_string(),
            amount: Some(request.amount),
        })
    }
}
