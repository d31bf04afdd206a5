use super::factory::{NotifierFactory, ProcessorFactory, ProcessorSet};
use super::service::PaymentService;
use super::validator::{CustomerValidator, PaymentDataValidator};
use crate::domain::customer::CustomerData;
use crate::domain::payment::PaymentData;
use crate::domain::ports::{
    NotifierBox, PaymentProcessorRef, RecurringProcessorRef, RefundProcessorRef,
    TransactionLogRef,
};
use crate::error::{PaymentError, Result};

/// Assembles a [`PaymentService`] step by step.
///
/// Completeness is checked once, in [`build`](Self::build), which reports
/// every required collaborator that was never set.
#[derive(Default)]
pub struct PaymentServiceBuilder {
    payment_processor: Option<PaymentProcessorRef>,
    notifier: Option<NotifierBox>,
    customer_validator: Option<CustomerValidator>,
    payment_validator: Option<PaymentDataValidator>,
    logger: Option<TransactionLogRef>,
    refund_processor: Option<RefundProcessorRef>,
    recurring_processor: Option<RecurringProcessorRef>,
}

impl PaymentServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payment_processor(mut self, processor: PaymentProcessorRef) -> Self {
        self.payment_processor = Some(processor);
        self
    }

    /// Sets the charge processor and every optional capability the set offers.
    pub fn processors(mut self, processors: ProcessorSet) -> Self {
        self.payment_processor = Some(processors.payment);
        self.refund_processor = processors.refunds;
        self.recurring_processor = processors.recurring;
        self
    }

    /// Lets the factory pick the processors for this payment.
    pub fn processor_for(self, factory: &ProcessorFactory, payment: &PaymentData) -> Self {
        self.processors(factory.create(payment))
    }

    pub fn refund_processor(mut self, processor: RefundProcessorRef) -> Self {
        self.refund_processor = Some(processor);
        self
    }

    pub fn recurring_processor(mut self, processor: RecurringProcessorRef) -> Self {
        self.recurring_processor = Some(processor);
        self
    }

    pub fn notifier(mut self, notifier: NotifierBox) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Lets the factory pick the confirmation channel for this customer.
    pub fn notifier_for(self, factory: &NotifierFactory, customer: &CustomerData) -> Result<Self> {
        Ok(self.notifier(factory.create(customer)?))
    }

    pub fn customer_validator(mut self, validator: CustomerValidator) -> Self {
        self.customer_validator = Some(validator);
        self
    }

    pub fn payment_validator(mut self, validator: PaymentDataValidator) -> Self {
        self.payment_validator = Some(validator);
        self
    }

    pub fn default_validators(self) -> Self {
        self.customer_validator(CustomerValidator::new())
            .payment_validator(PaymentDataValidator::new())
    }

    pub fn logger(mut self, logger: TransactionLogRef) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn build(self) -> Result<PaymentService> {
        let missing: Vec<&'static str> = [
            ("payment_processor", self.payment_processor.is_none()),
            ("notifier", self.notifier.is_none()),
            ("customer_validator", self.customer_validator.is_none()),
            ("payment_validator", self.payment_validator.is_none()),
            ("logger", self.logger.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, unset)| unset.then_some(name))
        .collect();

        match (
            self.payment_processor,
            self.notifier,
            self.customer_validator,
            self.payment_validator,
            self.logger,
        ) {
            (
                Some(processor),
                Some(notifier),
                Some(customer_validator),
                Some(payment_validator),
                Some(logger),
            ) => {
                let mut service = PaymentService::new(
                    processor,
                    notifier,
                    customer_validator,
                    payment_validator,
                    logger,
                );
                if let Some(refunds) = self.refund_processor {
                    service = service.with_refunds(refunds);
                }
                if let Some(recurring) = self.recurring_processor {
                    service = service.with_recurring(recurring);
                }
                Ok(service)
            }
            _ => Err(PaymentError::MissingConfiguration(missing)),
        }
    }
}
