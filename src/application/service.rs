use super::builder::PaymentServiceBuilder;
use super::factory::{ProcessorFactory, ProcessorSet};
use super::validator::{CustomerValidator, PaymentDataValidator};
use crate::domain::customer::CustomerData;
use crate::domain::payment::{PaymentData, PaymentResponse};
use crate::domain::ports::{
    NotifierBox, PaymentProcessorRef, RecurringProcessorRef, RefundProcessorRef,
    TransactionLogRef,
};
use crate::error::{Capability, PaymentError, Result};

/// The entry point for processing payments.
///
/// `PaymentService` wires a processor, a notifier, validators and a
/// transaction log together. It holds no state across calls besides the
/// injected collaborators; every call validates, charges, notifies and logs
/// in that order and stops at the first failure.
pub struct PaymentService {
    processor: PaymentProcessorRef,
    notifier: NotifierBox,
    customer_validator: CustomerValidator,
    payment_validator: PaymentDataValidator,
    logger: TransactionLogRef,
    refunds: Option<RefundProcessorRef>,
    recurring: Option<RecurringProcessorRef>,
}

impl PaymentService {
    /// Creates a service with explicitly injected collaborators.
    ///
    /// Refunds and recurring payments stay disabled until
    /// [`with_refunds`](Self::with_refunds) / [`with_recurring`](Self::with_recurring)
    /// provide the capability.
    pub fn new(
        processor: PaymentProcessorRef,
        notifier: NotifierBox,
        customer_validator: CustomerValidator,
        payment_validator: PaymentDataValidator,
        logger: TransactionLogRef,
    ) -> Self {
        Self {
            processor,
            notifier,
            customer_validator,
            payment_validator,
            logger,
            refunds: None,
            recurring: None,
        }
    }

    /// Creates a service from a processor set, enabling every capability it offers.
    pub fn from_processors(
        processors: ProcessorSet,
        notifier: NotifierBox,
        customer_validator: CustomerValidator,
        payment_validator: PaymentDataValidator,
        logger: TransactionLogRef,
    ) -> Self {
        Self {
            refunds: processors.refunds,
            recurring: processors.recurring,
            ..Self::new(
                processors.payment,
                notifier,
                customer_validator,
                payment_validator,
                logger,
            )
        }
    }

    /// Creates a service whose processor is selected from the payment's
    /// type and currency.
    pub fn with_processor_for(
        payment: &PaymentData,
        factory: &ProcessorFactory,
        notifier: NotifierBox,
        customer_validator: CustomerValidator,
        payment_validator: PaymentDataValidator,
        logger: TransactionLogRef,
    ) -> Self {
        Self::from_processors(
            factory.create(payment),
            notifier,
            customer_validator,
            payment_validator,
            logger,
        )
    }

    pub fn builder() -> PaymentServiceBuilder {
        PaymentServiceBuilder::new()
    }

    pub fn with_refunds(mut self, refunds: RefundProcessorRef) -> Self {
        self.refunds = Some(refunds);
        self
    }

    pub fn with_recurring(mut self, recurring: RecurringProcessorRef) -> Self {
        self.recurring = Some(recurring);
        self
    }

    /// Swaps the confirmation channel.
    pub fn set_notifier(&mut self, notifier: NotifierBox) {
        tracing::debug!(channel = ?notifier.channel(), "Setting notifier");
        self.notifier = notifier;
    }

    pub fn notifier(&self) -> &NotifierBox {
        &self.notifier
    }

    pub fn processor(&self) -> &PaymentProcessorRef {
        &self.processor
    }

    pub fn supports_refunds(&self) -> bool {
        self.refunds.is_some()
    }

    pub fn supports_recurring(&self) -> bool {
        self.recurring.is_some()
    }

    /// Validates the inputs, charges the customer, sends the confirmation
    /// and records the transaction.
    ///
    /// Any processor failure is reported as [`PaymentError::PaymentFailed`].
    pub async fn process_transaction(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> Result<PaymentResponse> {
        self.customer_validator.validate(customer)?;
        self.payment_validator.validate(payment)?;

        let response = self
            .processor
            .process_transaction(customer, payment)
            .await
            .map_err(|e| {
                tracing::warn!(customer = %customer.name, "Payment failed: {}", e);
                PaymentError::from(e)
            })?;

        self.notifier.send_confirmation(customer).await?;
        self.logger
            .log_transaction(customer, payment, &response)
            .await?;
        Ok(response)
    }

    /// Refunds a previously processed transaction.
    ///
    /// Fails with [`PaymentError::Unsupported`] before touching the processor
    /// or the log when no refund capability is configured.
    pub async fn process_refund(&self, transaction_id: &str) -> Result<PaymentResponse> {
        let refunds = self
            .refunds
            .as_ref()
            .ok_or(PaymentError::Unsupported(Capability::Refund))?;

        let response = refunds.refund_payment(transaction_id).await?;
        self.logger.log_refund(transaction_id, &response).await?;
        Ok(response)
    }

    /// Sets up a recurring payment, gated like [`process_refund`](Self::process_refund).
    pub async fn setup_recurring(
        &self,
        customer: &CustomerData,
        payment: &PaymentData,
    ) -> Result<PaymentResponse> {
        let recurring = self
            .recurring
            .as_ref()
            .ok_or(PaymentError::Unsupported(Capability::Recurring))?;

        self.customer_validator.validate(customer)?;
        self.payment_validator.validate(payment)?;

        let response = recurring.setup_recurring_payment(customer, payment).await?;
        self.logger
            .log_transaction(customer, payment, &response)
            .await?;
        Ok(response)
    }
}
