use crate::domain::ports::TransactionLog;
use crate::domain::record::LogRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

pub const DEFAULT_LOG_PATH: &str = "transactions.log";

/// Appends one human-readable line per record to a text file.
///
/// The file is opened in append mode for every record and each line goes out
/// in a single write. Writers sharing a file must serialize externally if
/// ordering across them matters.
#[derive(Debug, Clone)]
pub struct FileTransactionLog {
    path: PathBuf,
}

impl FileTransactionLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileTransactionLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

#[async_trait]
impl TransactionLog for FileTransactionLog {
    async fn append(&self, record: LogRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        let line = format!("{record}\n");
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{ContactInfo, CustomerData};
    use crate::domain::payment::{PaymentData, PaymentResponse};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_log_appends_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("transactions.log");
        let log = FileTransactionLog::new(&path);
        let response = PaymentResponse::success(0, Some("local-1".to_string()), "Refund successful");

        log.log_refund("local-1", &response).await.unwrap();
        log.log_refund("local-2", &response).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "refund for local-1 - status: success\nrefund for local-2 - status: success\n"
        );
    }

    #[tokio::test]
    async fn test_file_log_keeps_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("transactions.log");
        std::fs::write(&path, "earlier line\n").unwrap();

        let response = PaymentResponse::success(0, None, "Refund successful");
        FileTransactionLog::new(&path)
            .log_refund("local-1", &response)
            .await
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("earlier line\n"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[tokio::test]
    async fn test_multiline_name_writes_single_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("transactions.log");
        let customer = CustomerData::new(
            "Eve\nMallory paid 999999 USD - status: success",
            ContactInfo::with_email("eve@example.com"),
        );
        let payment = PaymentData::new(1, "tok_visa");
        let response = PaymentResponse::success(1, None, "Payment successful");

        FileTransactionLog::new(&path)
            .log_transaction(&customer, &payment, &response)
            .await
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.starts_with("Eve\\nMallory"));
    }
}
