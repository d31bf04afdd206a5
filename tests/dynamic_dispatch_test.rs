mod common;

use common::john;
use payment_service::application::factory::ProcessorSet;
use payment_service::application::service::PaymentService;
use payment_service::application::validator::{CustomerValidator, PaymentDataValidator};
use payment_service::domain::payment::PaymentData;
use payment_service::domain::ports::{NotifierBox, PaymentProcessorRef, TransactionLogRef};
use payment_service::infrastructure::log::InMemoryTransactionLog;
use payment_service::infrastructure::notifiers::EmailNotifier;
use payment_service::infrastructure::processors::LocalProcessor;
use std::sync::Arc;

#[tokio::test]
async fn test_collaborators_as_trait_objects() {
    let processor: PaymentProcessorRef = Arc::new(LocalProcessor::new());
    let notifier: NotifierBox = Box::new(EmailNotifier::new());
    let log = InMemoryTransactionLog::new();
    let logger: TransactionLogRef = Arc::new(log.clone());

    let service = PaymentService::new(
        processor,
        notifier,
        CustomerValidator::new(),
        PaymentDataValidator::new(),
        logger,
    );

    // Verify Send + Sync by moving the service into a task
    let handle = tokio::spawn(async move {
        service
            .process_transaction(&john(), &PaymentData::new(100, "tok_visa").with_currency("CAD"))
            .await
            .unwrap()
    });

    let response = handle.await.unwrap();
    assert!(response.transaction_id.unwrap().starts_with("local-transaction-id-"));
    assert_eq!(log.lines().await, vec!["John Doe paid 100 CAD - status: success"]);
}

#[tokio::test]
async fn test_shared_processor_across_services() {
    let processors = ProcessorSet::full(LocalProcessor::new());
    let log = InMemoryTransactionLog::new();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let service = PaymentService::from_processors(
            processors.clone(),
            Box::new(EmailNotifier::new()),
            CustomerValidator::new(),
            PaymentDataValidator::new(),
            Arc::new(log.clone()),
        );
        handles.push(tokio::spawn(async move {
            service
                .process_transaction(&john(), &PaymentData::new(100, "tok_visa").with_currency("EUR"))
                .await
                .unwrap()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().transaction_id.unwrap());
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 4);
    assert_eq!(log.lines().await.len(), 4);
}
