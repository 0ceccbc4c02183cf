//! Append-only persistence for approved transactions.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewTransaction, Transaction};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgTransactionStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result of an insert attempt.
///
/// A row whose `payment_id` is already stored is left untouched and reported
/// as `Duplicate` instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertOutcome {
    Inserted(Transaction),
    Duplicate,
}

#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn insert(&self, transaction: NewTransaction) -> Result<InsertOutcome, StoreError>;

    /// All rows ordered by descending `id`.
    async fn list_newest_first(&self) -> Result<Vec<Transaction>, StoreError>;
}
