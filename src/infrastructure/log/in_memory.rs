use crate::domain::ports::TransactionLog;
use crate::domain::record::LogRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory transaction log.
///
/// Uses `Arc<RwLock<Vec<String>>>` so clones observe the same lines.
/// Suited to tests and dry runs where nothing should touch the filesystem.
#[derive(Default, Clone)]
pub struct InMemoryTransactionLog {
    lines: Arc<RwLock<Vec<String>>>,
}

impl InMemoryTransactionLog {
    /// Creates a new, empty in-memory log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every line appended so far.
    pub async fn lines(&self) -> Vec<String> {
        self.lines.read().await.clone()
    }
}

#[async_trait]
impl TransactionLog for InMemoryTransactionLog {
    async fn append(&self, record: LogRecord) -> Result<()> {
        let mut lines = self.lines.write().await;
        lines.push(record.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{ContactInfo, CustomerData};
    use crate::domain::payment::{PaymentData, PaymentResponse};

    #[tokio::test]
    async fn test_in_memory_log_appends_in_order() {
        let log = InMemoryTransactionLog::new();
        let customer = CustomerData::new("John Doe", ContactInfo::with_email("john@example.com"));
        let payment = PaymentData::new(100, "tok_visa");
        let charge = PaymentResponse::success(100, Some("ch_1".to_string()), "Payment successful");
        let refund = PaymentResponse::success(100, Some("ch_1".to_string()), "Refund successful");

        log.log_transaction(&customer, &payment, &charge).await.unwrap();
        log.log_refund("ch_1", &refund).await.unwrap();

        assert_eq!(
            log.lines().await,
            vec![
                "John Doe paid 100 USD - status: success".to_string(),
                "refund for ch_1 - status: success".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_clones_share_lines() {
        let log = InMemoryTransactionLog::new();
        let shared = log.clone();
        let response = PaymentResponse::success(0, None, "Refund successful");

        shared.log_refund("local-1", &response).await.unwrap();
        assert_eq!(log.lines().await.len(), 1);
    }
}
