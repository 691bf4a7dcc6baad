use crate::domain::model::{ChargeOutcome, RefundOutcome};
use crate::domain::ports::PaymentGateway;
use crate::utils::error::GatewayError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// `PaymentGateway` adapter speaking JSON to a payments endpoint.
///
/// `POST {base}/payments` with `{patron_id, amount, description}` and
/// `POST {base}/refunds` with `{transaction_id, amount}`; both reply with
/// an approval flag and a message. Transport failures and non-success HTTP
/// statuses surface as `GatewayError`.
pub struct HttpGateway {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChargeRequest<'a> {
    patron_id: &'a str,
    amount: f64,
    description: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChargeReply {
    approved: bool,
    #[serde(default)]
    transaction_id: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
struct RefundRequest<'a> {
    transaction_id: &'a str,
    amount: f64,
}

#[derive(Debug, Deserialize)]
struct RefundReply {
    approved: bool,
    #[serde(default)]
    message: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        self
    }

    fn request(&self, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.post(format!("{}{}", self.base_url, path));
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        builder
    }
}

fn transport(e: reqwest::Error) -> GatewayError {
    GatewayError::Transport(e.to_string())
}

#[async_trait]
impl PaymentGateway for HttpGateway {
    async fn process_payment(
        &self,
        patron_id: &str,
        amount: f64,
        description: &str,
    ) -> Result<ChargeOutcome, GatewayError> {
        tracing::debug!(patron_id, amount, "posting charge to gateway");
        let reply: ChargeReply = self
            .request("/payments")
            .json(&ChargeRequest {
                patron_id,
                amount,
                description,
            })
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .json()
            .await
            .map_err(transport)?;

        Ok(ChargeOutcome {
            approved: reply.approved,
            transaction_id: reply.transaction_id,
            message: reply.message,
        })
    }

    async fn refund_payment(
        &self,
        transaction_id: &str,
        amount: f64,
    ) -> Result<RefundOutcome, GatewayError> {
        tracing::debug!(transaction_id, amount, "posting refund to gateway");
        let reply: RefundReply = self
            .request("/refunds")
            .json(&RefundRequest {
                transaction_id,
                amount,
            })
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .json()
            .await
            .map_err(transport)?;

        Ok(RefundOutcome {
            approved: reply.approved,
            message: reply.message,
        })
    }
}
