use crate::domain::gateway::{Charge, ChargeRequest, Refund, Subscription, SubscriptionRequest};
use crate::domain::ports::PaymentGateway;
use crate::error::GatewayError;
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

pub const DEFAULT_BASE_URL: &str = "https://api.stripe.com";

/// Client for the Stripe REST API (form-encoded requests, JSON responses).
#[derive(Clone)]
pub struct StripeGateway {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    recurring_price: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: ApiError,
}

#[derive(Debug, Default, Deserialize)]
struct ApiError {
    #[serde(rename = "type")]
    kind: Option<String>,
    code: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeCustomer {
    id: String,
}

#[derive(Debug, Deserialize)]
struct StripeSubscription {
    id: String,
    status: String,
    #[serde(default)]
    items: StripeList<StripeSubscriptionItem>,
}

#[derive(Debug, Deserialize)]
struct StripeList<T> {
    data: Vec<T>,
}

impl<T> Default for StripeList<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
struct StripeSubscriptionItem {
    price: StripePrice,
}

#[derive(Debug, Deserialize)]
struct StripePrice {
    unit_amount: Option<i64>,
}

impl From<StripeSubscription> for Subscription {
    fn from(sub: StripeSubscription) -> Self {
        // The configured price decides what is billed, not the request amount.
        let amount = sub
            .items
            .data
            .iter()
            .filter_map(|item| item.price.unit_amount)
            .reduce(|total, unit| total + unit);
        Subscription {
            id: sub.id,
            status: sub.status,
            amount,
        }
    }
}

impl StripeGateway {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            recurring_price: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Price id used for every subscription created by this gateway.
    pub fn with_recurring_price(mut self, price: impl Into<String>) -> Self {
        self.recurring_price = Some(price.into());
        self
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> Result<T, GatewayError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .form(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await?;
        let envelope: ErrorEnvelope = serde_json::from_str(&body).unwrap_or_default();
        Err(classify(status.as_u16(), envelope.error))
    }
}

fn classify(status: u16, error: ApiError) -> GatewayError {
    let message = error
        .message
        .unwrap_or_else(|| format!("request failed with status {status}"));

    match error.kind.as_deref() {
        Some("card_error") => GatewayError::Declined {
            code: error.code.unwrap_or_else(|| "card_declined".to_string()),
            message,
        },
        Some("invalid_request_error") => GatewayError::InvalidRequest(message),
        _ => GatewayError::Api { status, message },
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_charge(&self, request: ChargeRequest) -> Result<Charge, GatewayError> {
        let form = [
            ("amount", request.amount.to_string()),
            ("currency", request.currency),
            ("source", request.source),
            ("description", request.description),
        ];
        self.post("/v1/charges", &form).await
    }

    async fn create_refund(&self, charge_id: &str) -> Result<Refund, GatewayError> {
        self.post("/v1/refunds", &[("charge", charge_id.to_string())])
            .await
    }

    async fn create_subscription(
        &self,
        request: SubscriptionRequest,
    ) -> Result<Subscription, GatewayError> {
        let price = self
            .recurring_price
            .clone()
            .ok_or(GatewayError::NotConfigured("recurring price"))?;

        let mut customer_form = vec![("name", request.customer_name), ("source", request.source)];
        if let Some(email) = request.email {
            customer_form.push(("email", email));
        }
        let customer: StripeCustomer = self.post("/v1/customers", &customer_form).await?;

        let form = [("customer", customer.id), ("items[0][price]", price)];
        let subscription: StripeSubscription = self.post("/v1/subscriptions", &form).await?;
        Ok(subscription.into())
    }
}
