use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An approved payment as persisted in the `transactions` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: i64,
    /// Approval timestamp exactly as reported by the gateway.
    pub date: String,
    pub amount: f64,
    pub currency: String,
    pub description: String,
    pub payer_email: String,
    pub status: String,
    pub payment_id: i64,
    pub recorded_at: DateTime<Utc>,
}

/// Insert payload; `id` and `recorded_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub date: String,
    pub amount: f64,
    pub currency: String,
    pub description: String,
    pub payer_email: String,
    pub status: String,
    pub payment_id: i64,
}
