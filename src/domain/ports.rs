use super::customer::CustomerData;
use super::gateway::{Charge, ChargeRequest, Refund, Subscription, SubscriptionRequest};
use super::payment::{PaymentData, PaymentResponse};
use super::record::LogRecord;
use crate::error::{GatewayError, ProcessorError, Result};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Concrete processor variants known to the factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorKind {
    /// Backed by an external payment gateway.
    Gateway,
    /// Deferred settlement, no gateway call.
    Offline,
    /// Local sandbox backend.
    Local,
}

impl ProcessorKind {
    /// Selects the processor variant for a payment request.
    pub fn for_payment(payment: &PaymentData) -> Self {
        use super::payment::PaymentType;

        match (payment.payment_type, payment.currency.as_str()) {
            (PaymentType::Offline, _) => ProcessorKind::Offline,
            (PaymentType::Online, "USD") => ProcessorKind::Gateway,
            (PaymentType::Online, _) => ProcessorKind::Local,
        }
    }
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessorKind::Gateway => f.write_str("gateway"),
            ProcessorKind::Offline => f.write_str("offline"),
            ProcessorKind::Local => f.write_str("local"),
        }
    }
}

/// Delivery channels for payment confirmations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Sms,
}

#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    fn kind(&self) -> ProcessorKind;

    async fn process_transaction(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> Result<PaymentResponse, ProcessorError>;
}

#[async_trait]
pub trait RefundProcessor: Send + Sync {
    async fn refund_payment(&self, transaction_id: &str)
    -> Result<PaymentResponse, ProcessorError>;
}

#[async_trait]
pub trait RecurringProcessor: Send + Sync {
    async fn setup_recurring_payment(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> Result<PaymentResponse, ProcessorError>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    fn channel(&self) -> Channel;

    async fn send_confirmation(&self, customer: &CustomerData) -> Result<()>;
}

/// Append-only record of processed payments and refunds.
#[async_trait]
pub trait TransactionLog: Send + Sync {
    async fn append(&self, record: LogRecord) -> Result<()>;

    async fn log_transaction(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
        response: &PaymentResponse,
    ) -> Result<()> {
        self.append(LogRecord::transaction(customer, payment, response))
            .await
    }

    async fn log_refund(&self, transaction_id: &str, response: &PaymentResponse) -> Result<()> {
        self.append(LogRecord::refund(transaction_id, response)).await
    }
}

/// Outbound calls to an external payment API.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_charge(&self, request: ChargeRequest) -> Result<Charge, GatewayError>;
    async fn create_refund(&self, charge_id: &str) -> Result<Refund, GatewayError>;
    async fn create_subscription(
        &self,
        request: SubscriptionRequest,
    ) -> Result<Subscription, GatewayError>;
}

pub type PaymentProcessorRef = Arc<dyn PaymentProcessor>;
pub type RefundProcessorRef = Arc<dyn RefundProcessor>;
pub type RecurringProcessorRef = Arc<dyn RecurringProcessor>;
pub type NotifierBox = Box<dyn Notifier>;
pub type TransactionLogRef = Arc<dyn TransactionLog>;
pub type GatewayRef = Arc<dyn PaymentGateway>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentType;

    #[test]
    fn test_offline_wins_over_currency() {
        for currency in ["USD", "CAD", "EUR"] {
            let payment = PaymentData::new(100, "tok_visa")
                .with_currency(currency)
                .with_type(PaymentType::Offline);
            assert_eq!(ProcessorKind::for_payment(&payment), ProcessorKind::Offline);
        }
    }

    #[test]
    fn test_online_selection_by_currency() {
        let usd = PaymentData::new(100, "tok_visa");
        assert_eq!(ProcessorKind::for_payment(&usd), ProcessorKind::Gateway);

        let cad = PaymentData::new(100, "tok_visa").with_currency("CAD");
        assert_eq!(ProcessorKind::for_payment(&cad), ProcessorKind::Local);
    }
}
