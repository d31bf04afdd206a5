use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payment_service::application::factory::{NotifierFactory, ProcessorFactory, ProcessorSet};
use payment_service::application::service::PaymentService;
use payment_service::application::validator::{CustomerValidator, PaymentDataValidator};
use payment_service::config::Settings;
use payment_service::domain::customer::{ContactInfo, CustomerData};
use payment_service::domain::payment::{PaymentData, PaymentResponse, PaymentType};
use payment_service::domain::ports::{GatewayRef, TransactionLogRef};
use payment_service::infrastructure::gateway::SandboxGateway;
use payment_service::infrastructure::log::FileTransactionLog;
use payment_service::infrastructure::notifiers::{EmailNotifier, SmsNotifier};
use payment_service::infrastructure::processors::{GatewayProcessor, OfflineProcessor};
use payment_service::interfaces::csv::payment_reader::{PaymentReader, PaymentRequest};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the scripted payment scenarios
    Demo {
        #[command(flatten)]
        options: RunOptions,
    },
    /// Process payment requests from a CSV file
    Batch {
        /// Input CSV: name,email,phone,customer_id,amount,source,currency,type
        input: PathBuf,

        #[command(flatten)]
        options: RunOptions,
    },
}

#[derive(Args)]
struct RunOptions {
    /// Transaction log file. Overrides TRANSACTION_LOG.
    #[arg(long)]
    log_path: Option<PathBuf>,

    /// Use the in-process sandbox gateway even if STRIPE_API_KEY is set.
    #[arg(long)]
    sandbox: bool,
}

/// Collaborators shared by every service the binary assembles.
struct Runtime {
    gateway: GatewayRef,
    processors: ProcessorFactory,
    notifiers: NotifierFactory,
    sms_gateway: String,
    logger: TransactionLogRef,
}

impl Runtime {
    fn new(settings: Settings, options: RunOptions) -> Self {
        let gateway: GatewayRef = if options.sandbox {
            Arc::new(SandboxGateway::new())
        } else {
            settings.gateway()
        };
        let log_path = options.log_path.unwrap_or(settings.log_path);
        tracing::info!(path = %log_path.display(), "Logging transactions");

        Self {
            processors: ProcessorFactory::new(gateway.clone()),
            notifiers: NotifierFactory::new(settings.sms_gateway.clone()),
            sms_gateway: settings.sms_gateway,
            logger: Arc::new(FileTransactionLog::new(log_path)),
            gateway,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env().into_diagnostic()?;

    match cli.command {
        Command::Demo { options } => run_demo(&Runtime::new(settings, options)).await,
        Command::Batch { input, options } => {
            run_batch(&Runtime::new(settings, options), input).await
        }
    }
}

/// Prints a scenario outcome: the response on stdout, a failure on stderr.
fn report(
    label: &str,
    result: payment_service::error::Result<PaymentResponse>,
) -> Result<Option<PaymentResponse>> {
    match result {
        Ok(response) => {
            let json = serde_json::to_string(&response).into_diagnostic()?;
            println!("{label}: {json}");
            Ok(Some(response))
        }
        Err(e) => {
            eprintln!("{label} failed: {e}");
            Ok(None)
        }
    }
}

async fn run_demo(rt: &Runtime) -> Result<()> {
    let john = CustomerData::new("John Doe", ContactInfo::with_email("john@example.com"));
    let jane = CustomerData::new("Jane Doe", ContactInfo::with_phone("1234567890"));
    let payment = PaymentData::new(100, "tok_visa");

    // Explicit injection
    let gateway_processors = ProcessorSet::full(GatewayProcessor::new(rt.gateway.clone()));
    let email_service = PaymentService::from_processors(
        gateway_processors.clone(),
        Box::new(EmailNotifier::new()),
        CustomerValidator::new(),
        PaymentDataValidator::new(),
        rt.logger.clone(),
    );
    report("email", email_service.process_transaction(&john, &payment).await)?;

    let sms_service = PaymentService::new(
        gateway_processors.payment.clone(),
        Box::new(SmsNotifier::new(rt.sms_gateway.clone())),
        CustomerValidator::new(),
        PaymentDataValidator::new(),
        rt.logger.clone(),
    );
    let sms_response = report("sms", sms_service.process_transaction(&jane, &payment).await)?;

    if let Some(transaction_id) = sms_response.and_then(|r| r.transaction_id) {
        report("refund", email_service.process_refund(&transaction_id).await)?;
    }

    let offline_service = PaymentService::new(
        Arc::new(OfflineProcessor::new()),
        Box::new(EmailNotifier::new()),
        CustomerValidator::new(),
        PaymentDataValidator::new(),
        rt.logger.clone(),
    );
    report("offline", offline_service.process_transaction(&john, &payment).await)?;
    report(
        "offline refund",
        offline_service.process_refund("offline-payment").await,
    )?;
    report(
        "offline recurring",
        offline_service.setup_recurring(&john, &payment).await,
    )?;

    let declined = PaymentData::new(100, "tok_radarBlock");
    report("declined", email_service.process_transaction(&john, &declined).await)?;

    let recurring = PaymentData::new(100, "pm_card_visa");
    report("recurring", email_service.setup_recurring(&john, &recurring).await)?;

    // Notifier chosen from the customer's contact info
    let notifier = rt.notifiers.create(&jane).into_diagnostic()?;
    let strategy_service = PaymentService::from_processors(
        gateway_processors,
        notifier,
        CustomerValidator::new(),
        PaymentDataValidator::new(),
        rt.logger.clone(),
    );
    report("strategy", strategy_service.process_transaction(&jane, &payment).await)?;

    // Processor chosen from the payment's type and currency
    let factory_payments = [
        ("factory usd", PaymentData::new(100, "tok_visa")),
        (
            "factory offline",
            PaymentData::new(100, "tok_visa").with_type(PaymentType::Offline),
        ),
        (
            "factory cad",
            PaymentData::new(100, "tok_visa").with_currency("CAD"),
        ),
    ];
    for (label, payment) in factory_payments {
        let service = PaymentService::with_processor_for(
            &payment,
            &rt.processors,
            rt.notifiers.create(&jane).into_diagnostic()?,
            CustomerValidator::new(),
            PaymentDataValidator::new(),
            rt.logger.clone(),
        );
        report(label, service.process_transaction(&jane, &payment).await)?;
    }

    let service = PaymentService::builder()
        .processor_for(&rt.processors, &payment)
        .notifier_for(&rt.notifiers, &john)
        .into_diagnostic()?
        .default_validators()
        .logger(rt.logger.clone())
        .build()
        .into_diagnostic()?;
    report("builder", service.process_transaction(&john, &payment).await)?;

    Ok(())
}

async fn process_request(
    rt: &Runtime,
    request: &PaymentRequest,
) -> payment_service::error::Result<PaymentResponse> {
    let service = PaymentService::builder()
        .processor_for(&rt.processors, &request.payment)
        .notifier_for(&rt.notifiers, &request.customer)?
        .default_validators()
        .logger(rt.logger.clone())
        .build()?;

    service
        .process_transaction(&request.customer, &request.payment)
        .await
}

async fn run_batch(rt: &Runtime, input: PathBuf) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let reader = PaymentReader::new(file);

    for request in reader.requests() {
        match request {
            Ok(request) => match process_request(rt, &request).await {
                Ok(response) => {
                    println!("{}", serde_json::to_string(&response).into_diagnostic()?)
                }
                Err(e) => eprintln!("Error processing payment: {}", e),
            },
            Err(e) => eprintln!("Error reading payment: {}", e),
        }
    }

    Ok(())
}
