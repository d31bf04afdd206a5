#![allow(dead_code)]

use async_trait::async_trait;
use payment_service::domain::customer::{ContactInfo, CustomerData};
use payment_service::domain::ports::{Channel, Notifier};
use payment_service::error::Result;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub fn john() -> CustomerData {
    CustomerData::new("John Doe", ContactInfo::with_email("john@example.com"))
}

pub fn jane() -> CustomerData {
    CustomerData::new("Jane Doe", ContactInfo::with_phone("1234567890"))
}

/// Notifier double that remembers who it confirmed.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub confirmed: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn names(&self) -> Vec<String> {
        self.confirmed.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn channel(&self) -> Channel {
        Channel::Email
    }

    async fn send_confirmation(&self, customer: &CustomerData) -> Result<()> {
        self.confirmed.lock().unwrap().push(customer.name.clone());
        Ok(())
    }
}

pub fn generate_csv(path: &Path, rows: &[[&str; 8]]) -> std::result::Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record([
        "name",
        "email",
        "phone",
        "customer_id",
        "amount",
        "source",
        "currency",
        "type",
    ])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
