use crate::domain::customer::CustomerData;
use crate::domain::payment::PaymentData;
use crate::domain::ports::{
    GatewayRef, NotifierBox, PaymentProcessor, PaymentProcessorRef, ProcessorKind,
    RecurringProcessor, RecurringProcessorRef, RefundProcessor, RefundProcessorRef,
};
use crate::error::{PaymentError, Result};
use crate::infrastructure::notifiers::{EmailNotifier, SmsNotifier};
use crate::infrastructure::processors::{GatewayProcessor, LocalProcessor, OfflineProcessor};
use std::sync::Arc;

pub const DEFAULT_SMS_GATEWAY: &str = "YourSMSService";

/// A charge processor together with the optional capabilities it offers.
#[derive(Clone)]
pub struct ProcessorSet {
    pub payment: PaymentProcessorRef,
    pub refunds: Option<RefundProcessorRef>,
    pub recurring: Option<RecurringProcessorRef>,
}

impl ProcessorSet {
    /// A processor that only charges.
    pub fn charge_only<P>(processor: P) -> Self
    where
        P: PaymentProcessor + 'static,
    {
        Self {
            payment: Arc::new(processor),
            refunds: None,
            recurring: None,
        }
    }

    /// A processor filling the charge, refund and recurring slots at once.
    pub fn full<P>(processor: P) -> Self
    where
        P: PaymentProcessor + RefundProcessor + RecurringProcessor + 'static,
    {
        let processor = Arc::new(processor);
        Self {
            payment: processor.clone(),
            refunds: Some(processor.clone() as RefundProcessorRef),
            recurring: Some(processor as RecurringProcessorRef),
        }
    }

    pub fn kind(&self) -> ProcessorKind {
        self.payment.kind()
    }
}

/// Chooses a processor variant from the attributes of a payment.
#[derive(Clone)]
pub struct ProcessorFactory {
    gateway: GatewayRef,
}

impl ProcessorFactory {
    /// `gateway` backs every gateway-kind processor this factory creates.
    pub fn new(gateway: GatewayRef) -> Self {
        Self { gateway }
    }

    pub fn create(&self, payment: &PaymentData) -> ProcessorSet {
        let kind = ProcessorKind::for_payment(payment);
        tracing::debug!(%kind, currency = %payment.currency, "Selected payment processor");

        match kind {
            ProcessorKind::Offline => ProcessorSet::charge_only(OfflineProcessor::new()),
            ProcessorKind::Gateway => ProcessorSet::full(GatewayProcessor::new(self.gateway.clone())),
            ProcessorKind::Local => ProcessorSet::full(LocalProcessor::new()),
        }
    }
}

/// Chooses a confirmation channel from a customer's contact info.
///
/// Phone takes precedence over email.
#[derive(Debug, Clone)]
pub struct NotifierFactory {
    sms_gateway: String,
}

impl NotifierFactory {
    pub fn new(sms_gateway: impl Into<String>) -> Self {
        Self {
            sms_gateway: sms_gateway.into(),
        }
    }

    pub fn create(&self, customer: &CustomerData) -> Result<NotifierBox> {
        let contact = &customer.contact_info;
        if contact.phone().is_some() {
            return Ok(Box::new(SmsNotifier::new(self.sms_gateway.clone())));
        }
        if contact.email().is_some() {
            return Ok(Box::new(EmailNotifier::new()));
        }
        Err(PaymentError::NoContactChannel(customer.name.clone()))
    }
}

impl Default for NotifierFactory {
    fn default() -> Self {
        Self::new(DEFAULT_SMS_GATEWAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::ContactInfo;
    use crate::domain::payment::PaymentType;
    use crate::domain::ports::Channel;
    use crate::infrastructure::gateway::SandboxGateway;

    fn factory() -> ProcessorFactory {
        ProcessorFactory::new(Arc::new(SandboxGateway::new()))
    }

    #[test]
    fn test_offline_processor_has_no_capabilities() {
        let set = factory().create(
            &PaymentData::new(100, "tok_visa")
                .with_currency("CAD")
                .with_type(PaymentType::Offline),
        );
        assert_eq!(set.kind(), ProcessorKind::Offline);
        assert!(set.refunds.is_none());
        assert!(set.recurring.is_none());
    }

    #[test]
    fn test_online_processors_support_refunds() {
        let usd = factory().create(&PaymentData::new(100, "tok_visa"));
        assert_eq!(usd.kind(), ProcessorKind::Gateway);
        assert!(usd.refunds.is_some() && usd.recurring.is_some());

        let cad = factory().create(&PaymentData::new(100, "tok_visa").with_currency("CAD"));
        assert_eq!(cad.kind(), ProcessorKind::Local);
        assert!(cad.refunds.is_some() && cad.recurring.is_some());
    }

    #[test]
    fn test_notifier_prefers_phone() {
        let factory = NotifierFactory::default();
        let both = CustomerData::new(
            "John Doe",
            ContactInfo::new(Some("john@example.com".into()), Some("1234567890".into())),
        );
        assert_eq!(factory.create(&both).unwrap().channel(), Channel::Sms);

        let email = CustomerData::new("John Doe", ContactInfo::with_email("john@example.com"));
        assert_eq!(factory.create(&email).unwrap().channel(), Channel::Email);
    }

    #[test]
    fn test_notifier_without_channel() {
        let nobody = CustomerData::new("John Doe", ContactInfo::default());
        assert!(matches!(
            NotifierFactory::default().create(&nobody),
            Err(PaymentError::NoContactChannel(_))
        ));
    }
}
