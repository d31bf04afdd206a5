use crate::domain::customer::CustomerData;
use crate::domain::payment::{PaymentData, PaymentResponse};
use crate::domain::ports::{PaymentProcessor, ProcessorKind};
use crate::error::ProcessorError;
use async_trait::async_trait;

/// Accepts payments for deferred settlement. Charges only.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProcessor;

impl OfflineProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentProcessor for OfflineProcessor {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Offline
    }

    async fn process_transaction(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> Result<PaymentResponse, ProcessorError> {
        tracing::info!(customer = %customer.name, "Processing offline payment");
        Ok(PaymentResponse::success(
            payment.amount,
            None,
            "Offline payment success",
        ))
    }
}
