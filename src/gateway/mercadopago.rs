//! Reqwest-backed Mercado Pago payment lookup.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};

use super::{GatewayError, PaymentDetails, PaymentGateway};
use crate::config::Config;

pub struct MercadoPagoClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl MercadoPagoClient {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            access_token: access_token.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.api_base_url.clone(),
            config.access_token.clone(),
            config.request_timeout,
        )
    }

    fn payment_url(&self, payment_id: i64) -> String {
        format!(
            "{}/v1/payments/{payment_id}",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl PaymentGateway for MercadoPagoClient {
    async fn fetch_payment(&self, payment_id: i64) -> Result<PaymentDetails, GatewayError> {
        let response = self
            .client
            .get(self.payment_url(payment_id))
            .bearer_auth(&self.access_token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(GatewayError::UnexpectedStatus(status));
        }

        let body = response.bytes().await.map_err(GatewayError::Transport)?;
        serde_json::from_slice(&body).map_err(GatewayError::Decode)
    }
}
