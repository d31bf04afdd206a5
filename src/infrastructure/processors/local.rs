use crate::domain::customer::CustomerData;
use crate::domain::payment::{PaymentData, PaymentResponse};
use crate::domain::ports::{PaymentProcessor, ProcessorKind, RecurringProcessor, RefundProcessor};
use crate::error::ProcessorError;
use async_trait::async_trait;
use uuid::Uuid;

/// Sandbox backend that settles everything locally.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProcessor;

impl LocalProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentProcessor for LocalProcessor {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Local
    }

    async fn process_transaction(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> Result<PaymentResponse, ProcessorError> {
        let transaction_id = format!("local-transaction-id-{}", Uuid::new_v4());
        tracing::info!(customer = %customer.name, %transaction_id, "Processing payment locally");
        Ok(PaymentResponse::success(
            payment.amount,
            Some(transaction_id),
            "Payment successful",
        ))
    }
}

#[async_trait]
impl RefundProcessor for LocalProcessor {
    async fn refund_payment(
        &self,
        transaction_id: &str,
    ) -> Result<PaymentResponse, ProcessorError> {
        if transaction_id.is_empty() {
            return Err(ProcessorError::Rejected(
                "transaction id must not be empty".to_string(),
            ));
        }
        tracing::info!(%transaction_id, "Refunding payment locally");
        Ok(PaymentResponse::success(
            0,
            Some(transaction_id.to_string()),
            "Refund successful",
        ))
    }
}

#[async_trait]
impl RecurringProcessor for LocalProcessor {
    async fn setup_recurring_payment(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> Result<PaymentResponse, ProcessorError> {
        tracing::info!(customer = %customer.name, "Setting up recurring payment locally");
        Ok(PaymentResponse::success(
            payment.amount,
            None,
            "Recurring payment successful",
        ))
    }
}
