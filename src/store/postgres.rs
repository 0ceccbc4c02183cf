use async_trait::async_trait;
use sqlx::PgPool;

use super::{InsertOutcome, StoreError, TransactionStore};
use crate::models::{NewTransaction, Transaction};

const INSERT_TRANSACTION: &str = r#"
    INSERT INTO transactions (date, amount, currency, description, payer_email, status, payment_id)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
    ON CONFLICT (payment_id) DO NOTHING
    RETURNING id, date, amount, currency, description, payer_email, status, payment_id, recorded_at
"#;

const SELECT_NEWEST_FIRST: &str = r#"
    SELECT id, date, amount, currency, description, payer_email, status, payment_id, recorded_at
    FROM transactions
    ORDER BY id DESC
"#;

#[derive(Clone)]
pub struct PgTransactionStore {
    pool: PgPool,
}

impl PgTransactionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionStore for PgTransactionStore {
    async fn insert(&self, transaction: NewTransaction) -> Result<InsertOutcome, StoreError> {
        let inserted = sqlx::query_as::<_, Transaction>(INSERT_TRANSACTION)
            .bind(transaction.date)
            .bind(transaction.amount)
            .bind(transaction.currency)
            .bind(transaction.description)
            .bind(transaction.payer_email)
            .bind(transaction.status)
            .bind(transaction.payment_id)
            .fetch_optional(&self.pool)
            .await?;

        // RETURNING yields no row when the conflict clause skipped the insert.
        Ok(match inserted {
            Some(row) => InsertOutcome::Inserted(row),
            None => InsertOutcome::Duplicate,
        })
    }

    async fn list_newest_first(&self) -> Result<Vec<Transaction>, StoreError> {
        let rows = sqlx::query_as::<_, Transaction>(SELECT_NEWEST_FIRST)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
