use crate::domain::customer::CustomerData;
use crate::domain::gateway::{ChargeRequest, SubscriptionRequest};
use crate::domain::payment::{PaymentData, PaymentResponse, PaymentStatus};
use crate::domain::ports::{
    GatewayRef, PaymentProcessor, ProcessorKind, RecurringProcessor, RefundProcessor,
};
use crate::error::ProcessorError;
use async_trait::async_trait;

/// Processor that delegates every operation to an external payment gateway.
///
/// Supports charges, refunds and recurring payments.
#[derive(Clone)]
pub struct GatewayProcessor {
    gateway: GatewayRef,
}

impl GatewayProcessor {
    pub fn new(gateway: GatewayRef) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl PaymentProcessor for GatewayProcessor {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Gateway
    }

    async fn process_transaction(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> Result<PaymentResponse, ProcessorError> {
        let request = ChargeRequest {
            amount: payment.amount,
            currency: payment.currency.to_ascii_lowercase(),
            source: payment.source.clone(),
            description: format!("Charge for {}", customer.name),
        };

        let charge = self.gateway.create_charge(request).await.inspect_err(|e| {
            tracing::warn!(customer = %customer.name, "Payment failed: {}", e);
        })?;

        tracing::info!(charge = %charge.id, status = %charge.status, "Payment successful");
        Ok(PaymentResponse {
            status: PaymentStatus::from_gateway(&charge.status),
            amount: charge.amount,
            transaction_id: Some(charge.id),
            message: "Payment successful".to_string(),
        })
    }
}

#[async_trait]
impl RefundProcessor for GatewayProcessor {
    async fn refund_payment(
        &self,
        transaction_id: &str,
    ) -> Result<PaymentResponse, ProcessorError> {
        let refund = self.gateway.create_refund(transaction_id).await?;

        tracing::info!(refund = %refund.id, charge = %refund.charge, "Refund successful");
        Ok(PaymentResponse {
            status: PaymentStatus::from_gateway(&refund.status),
            amount: refund.amount,
            transaction_id: Some(refund.charge),
            message: "Refund successful".to_string(),
        })
    }
}

#[async_trait]
impl RecurringProcessor for GatewayProcessor {
    async fn setup_recurring_payment(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> Result<PaymentResponse, ProcessorError> {
        let request = SubscriptionRequest {
            customer_name: customer.name.clone(),
            email: customer.contact_info.email().map(str::to_string),
            source: payment.source.clone(),
            amount: payment.amount,
            currency: payment.currency.to_ascii_lowercase(),
        };

        let subscription = self.gateway.create_subscription(request).await?;

        tracing::info!(subscription = %subscription.id, "Recurring payment set up");
        Ok(PaymentResponse {
            status: PaymentStatus::from_gateway(&subscription.status),
            amount: subscription.amount.unwrap_or(payment.amount),
            transaction_id: Some(subscription.id),
            message: "Recurring payment successful".to_string(),
        })
    }
}
