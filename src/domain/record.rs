use super::customer::CustomerData;
use super::payment::{PaymentData, PaymentResponse, PaymentStatus};
use std::fmt::{self, Write};

/// One append-only entry of the transaction log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogRecord {
    Transaction {
        customer: String,
        amount: i64,
        currency: String,
        status: PaymentStatus,
    },
    Refund {
        transaction_id: String,
        status: PaymentStatus,
    },
}

impl LogRecord {
    pub fn transaction(
        customer: &CustomerData,
        payment: &PaymentData,
        response: &PaymentResponse,
    ) -> Self {
        LogRecord::Transaction {
            customer: customer.name.clone(),
            amount: payment.amount,
            currency: payment.currency.to_ascii_uppercase(),
            status: response.status,
        }
    }

    pub fn refund(transaction_id: &str, response: &PaymentResponse) -> Self {
        LogRecord::Refund {
            transaction_id: transaction_id.to_string(),
            status: response.status,
        }
    }
}

/// Escapes control characters so a record always fits on one line.
struct SingleLine<'a>(&'a str);

impl fmt::Display for SingleLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            if c.is_control() {
                write!(f, "{}", c.escape_default())?;
            } else {
                f.write_char(c)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogRecord::Transaction {
                customer,
                amount,
                currency,
                status,
            } => write!(
                f,
                "{} paid {amount} {} - status: {status}",
                SingleLine(customer),
                SingleLine(currency)
            ),
            LogRecord::Refund {
                transaction_id,
                status,
            } => write!(f, "refund for {} - status: {status}", SingleLine(transaction_id)),
        }
    }
}
