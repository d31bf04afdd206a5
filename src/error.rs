use std::fmt;
use thiserror::Error;

/// Optional processor capabilities the façade gates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Refund,
    Recurring,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Refund => f.write_str("refunds"),
            Capability::Recurring => f.write_str("recurring payments"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Payment failed: {0}")]
    PaymentFailed(String),
    #[error("This processor does not support {0}")]
    Unsupported(Capability),
    #[error("Missing configuration for {}", .0.join(", "))]
    MissingConfiguration(Vec<&'static str>),
    #[error("Invalid payment type: {0}")]
    InvalidPaymentType(String),
    #[error("No valid contact channel for customer '{0}'")]
    NoContactChannel(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Errors raised by an external payment gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("card declined ({code}): {message}")]
    Declined { code: String, message: String },
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("gateway returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("gateway not configured: {0}")]
    NotConfigured(&'static str),
}

/// Native error kind of payment processors.
///
/// Never crosses the service boundary as-is: the façade flattens it into
/// [`PaymentError::PaymentFailed`].
#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("{0}")]
    Rejected(String),
}

impl From<ProcessorError> for PaymentError {
    fn from(err: ProcessorError) -> Self {
        PaymentError::PaymentFailed(err.to_string())
    }
}

pub type Result<T, E = PaymentError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configuration_lists_every_field() {
        let err = PaymentError::MissingConfiguration(vec!["notifier", "logger"]);
        assert_eq!(err.to_string(), "Missing configuration for notifier, logger");
    }

    #[test]
    fn test_processor_error_flattens_to_payment_failed() {
        let err: PaymentError = ProcessorError::Gateway(GatewayError::Declined {
            code: "card_declined".to_string(),
            message: "Your card was declined.".to_string(),
        })
        .into();

        match err {
            PaymentError::PaymentFailed(msg) => assert!(msg.contains("card_declined")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_capability_message() {
        let err = PaymentError::Unsupported(Capability::Refund);
        assert_eq!(err.to_string(), "This processor does not support refunds");
    }

    #[test]
    fn test_io_error_converts() {
        let err: PaymentError = std::io::Error::other("disk full").into();
        assert!(matches!(err, PaymentError::IoError(_)));
        assert_eq!(err.to_string(), "IO error: disk full");
    }
}
