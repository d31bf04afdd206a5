use crate::application::factory::DEFAULT_SMS_GATEWAY;
use crate::domain::ports::GatewayRef;
use crate::error::{PaymentError, Result};
use crate::infrastructure::gateway::stripe::DEFAULT_BASE_URL;
use crate::infrastructure::gateway::{SandboxGateway, StripeGateway};
use crate::infrastructure::log::file::DEFAULT_LOG_PATH;
use std::path::PathBuf;
use std::sync::Arc;

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Secret key for the Stripe API. The sandbox gateway is used without one.
    pub stripe_api_key: Option<String>,
    pub stripe_api_base: String,
    pub stripe_recurring_price: Option<String>,
    pub sms_gateway: String,
    pub log_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stripe_api_key: None,
            stripe_api_base: DEFAULT_BASE_URL.to_string(),
            stripe_recurring_price: None,
            sms_gateway: DEFAULT_SMS_GATEWAY.to_string(),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let stripe_api_base = get("STRIPE_API_BASE").unwrap_or(defaults.stripe_api_base);
        if !stripe_api_base.starts_with("http://") && !stripe_api_base.starts_with("https://") {
            return Err(PaymentError::Config(format!(
                "STRIPE_API_BASE must be an http(s) URL, got '{stripe_api_base}'"
            )));
        }

        Ok(Self {
            stripe_api_key: get("STRIPE_API_KEY"),
            stripe_api_base,
            stripe_recurring_price: get("STRIPE_RECURRING_PRICE"),
            sms_gateway: get("SMS_GATEWAY").unwrap_or(defaults.sms_gateway),
            log_path: get("TRANSACTION_LOG")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_path),
        })
    }

    /// The gateway these settings describe: Stripe when a key is configured,
    /// the in-process sandbox otherwise.
    pub fn gateway(&self) -> GatewayRef {
        match &self.stripe_api_key {
            Some(key) => {
                let mut gateway = StripeGateway::new(key).with_base_url(&self.stripe_api_base);
                if let Some(price) = &self.stripe_recurring_price {
                    gateway = gateway.with_recurring_price(price);
                }
                tracing::info!(base = %self.stripe_api_base, "Using Stripe gateway");
                Arc::new(gateway)
            }
            None => {
                tracing::info!("STRIPE_API_KEY not set, using sandbox gateway");
                Arc::new(SandboxGateway::new())
            }
        }
    }
}
