use crate::domain::customer::{ContactInfo, CustomerData};
use crate::domain::payment::{DEFAULT_CURRENCY, PaymentData, PaymentType};
use crate::error::Result;
use serde::Deserialize;
use std::io::Read;

/// One CSV row: `name,email,phone,customer_id,amount,source,currency,type`.
#[derive(Debug, Deserialize)]
struct PaymentRecord {
    name: String,
    email: Option<String>,
    phone: Option<String>,
    customer_id: Option<String>,
    amount: i64,
    source: String,
    currency: Option<String>,
    #[serde(rename = "type")]
    payment_type: Option<String>,
}

/// A customer paired with the payment they requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    pub customer: CustomerData,
    pub payment: PaymentData,
}

impl PaymentRequest {
    fn from_record(record: PaymentRecord) -> Result<Self> {
        let payment_type = match record.payment_type {
            Some(t) => t.parse()?,
            None => PaymentType::Online,
        };

        let mut customer = CustomerData::new(
            record.name,
            ContactInfo::new(record.email, record.phone),
        );
        customer.customer_id = record.customer_id;

        let payment = PaymentData::new(record.amount, record.source)
            .with_currency(record.currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()))
            .with_type(payment_type);

        Ok(Self { customer, payment })
    }
}

/// Reads payment requests from a CSV source.
///
/// Wraps `csv::Reader` and yields one `Result<PaymentRequest>` per row, so a
/// malformed row does not stop the rows after it.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and converts payment requests.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize::<PaymentRecord>()
            .map(|result| -> Result<PaymentRequest> { PaymentRequest::from_record(result?) })
    }
}
