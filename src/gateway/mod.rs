//! Payment lookups against the gateway that originates notifications.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::models::NewTransaction;

pub mod mercadopago;

pub use mercadopago::MercadoPagoClient;

pub const APPROVED: &str = "approved";

const DEFAULT_DATE: &str = "N/A";
const DEFAULT_DESCRIPTION: &str = "Sin concepto";
const DEFAULT_PAYER_EMAIL: &str = "N/A";
const DEFAULT_STATUS: &str = "N/A";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("gateway responded with HTTP {0}")]
    UnexpectedStatus(StatusCode),

    #[error("gateway returned an unreadable payment: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Subset of the gateway's payment resource that gets recorded.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PaymentDetails {
    pub id: Option<i64>,
    pub status: Option<String>,
    pub date_approved: Option<String>,
    pub transaction_amount: Option<f64>,
    pub currency_id: Option<String>,
    pub description: Option<String>,
    pub payer: Option<Payer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Payer {
    pub email: Option<String>,
}

impl PaymentDetails {
    pub fn is_approved(&self) -> bool {
        self.status.as_deref() == Some(APPROVED)
    }
}

impl From<PaymentDetails> for NewTransaction {
    fn from(details: PaymentDetails) -> Self {
        Self {
            date: details
                .date_approved
                .unwrap_or_else(|| DEFAULT_DATE.to_string()),
            amount: details.transaction_amount.unwrap_or_default(),
            currency: details.currency_id.unwrap_or_default(),
            description: details
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            payer_email: details
                .payer
                .and_then(|payer| payer.email)
                .unwrap_or_else(|| DEFAULT_PAYER_EMAIL.to_string()),
            status: details
                .status
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            payment_id: details.id.unwrap_or_default(),
        }
    }
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Fetch the current state of a payment. Anything but HTTP 200 is an error.
    async fn fetch_payment(&self, payment_id: i64) -> Result<PaymentDetails, GatewayError>;
}
