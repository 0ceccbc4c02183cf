//! Turns an inbound payment notification into at most one stored transaction.
//!
//! The notification body is only a trigger: the authoritative payment data is
//! fetched from the gateway and recorded when its status is approved.

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::gateway::{GatewayError, PaymentGateway};
use crate::models::{NewTransaction, Transaction};
use crate::store::{InsertOutcome, StoreError, TransactionStore};

pub const PAYMENT_CREATED: &str = "payment.created";

#[derive(Debug, Deserialize)]
pub struct Notification {
    pub action: Option<String>,
    pub data: Option<NotificationData>,
}

#[derive(Debug, Deserialize)]
pub struct NotificationData {
    pub id: Option<ResourceId>,
}

/// The gateway sends the resource id as a number or as a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(i64),
    Text(String),
}

impl ResourceId {
    fn as_i64(&self) -> Option<i64> {
        match self {
            ResourceId::Number(id) => Some(*id),
            ResourceId::Text(id) => id.trim().parse().ok(),
        }
    }
}

impl Notification {
    /// `None` when the body is empty or not a JSON object of the expected shape.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }

    /// Payment to look up, present only for `payment.created` notifications.
    pub fn created_payment_id(&self) -> Option<i64> {
        if self.action.as_deref() != Some(PAYMENT_CREATED) {
            return None;
        }
        self.data.as_ref()?.id.as_ref()?.as_i64()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationOutcome {
    /// Malformed body or an action other than `payment.created`.
    Ignored,
    NotApproved { payment_id: i64, status: String },
    Stored(Transaction),
    Duplicate { payment_id: i64 },
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("payment lookup failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error("failed to store transaction: {0}")]
    Persistence(#[from] StoreError),
}

pub async fn process_notification(
    body: &[u8],
    gateway: &dyn PaymentGateway,
    store: &dyn TransactionStore,
) -> Result<NotificationOutcome, ProcessingError> {
    let Some(payment_id) = Notification::from_body(body).and_then(|n| n.created_payment_id())
    else {
        return Ok(NotificationOutcome::Ignored);
    };

    let details = gateway.fetch_payment(payment_id).await?;
    if !details.is_approved() {
        return Ok(NotificationOutcome::NotApproved {
            payment_id,
            status: details.status.unwrap_or_default(),
        });
    }

    let transaction = NewTransaction::from(details);
    let stored_payment_id = transaction.payment_id;
    match store.insert(transaction).await? {
        InsertOutcome::Inserted(row) => Ok(NotificationOutcome::Stored(row)),
        InsertOutcome::Duplicate => Ok(NotificationOutcome::Duplicate {
            payment_id: stored_payment_id,
        }),
    }
}

pub fn log_result(result: &Result<NotificationOutcome, ProcessingError>) {
    match result {
        Ok(NotificationOutcome::Ignored) => debug!("Notification ignored"),
        Ok(NotificationOutcome::NotApproved { payment_id, status }) => {
            debug!(payment_id, status = %status, "Payment not approved, nothing stored");
        }
        Ok(NotificationOutcome::Stored(row)) => {
            info!(id = row.id, payment_id = row.payment_id, "Approved payment stored");
        }
        Ok(NotificationOutcome::Duplicate { payment_id }) => {
            warn!(payment_id, "Payment already recorded, duplicate notification dropped");
        }
        Err(e) => error!(error = %e, "Failed to process payment notification"),
    }
}
