use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::{InsertOutcome, StoreError, TransactionStore};
use crate::models::{NewTransaction, Transaction};

/// Vec-backed store mirroring the Postgres unique constraint on `payment_id`.
#[derive(Default)]
pub struct MemoryTransactionStore {
    rows: Mutex<Vec<Transaction>>,
}

impl MemoryTransactionStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl TransactionStore for MemoryTransactionStore {
    async fn insert(&self, transaction: NewTransaction) -> Result<InsertOutcome, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.payment_id == transaction.payment_id) {
            return Ok(InsertOutcome::Duplicate);
        }

        let row = Transaction {
            id: rows.last().map_or(1, |last| last.id + 1),
            date: transaction.date,
            amount: transaction.amount,
            currency: transaction.currency,
            description: transaction.description,
            payer_email: transaction.payer_email,
            status: transaction.status,
            payment_id: transaction.payment_id,
            recorded_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(InsertOutcome::Inserted(row))
    }

    async fn list_newest_first(&self) -> Result<Vec<Transaction>, StoreError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().rev().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_transaction(payment_id: i64) -> NewTransaction {
        NewTransaction {
            date: "2024-01-01T00:00:00Z".to_string(),
            amount: 10.0,
            currency: "ARS".to_string(),
            description: "Order".to_string(),
            payer_email: "a@b.com".to_string(),
            status: "approved".to_string(),
            payment_id,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = MemoryTransactionStore::default();

        let first = store.insert(new_transaction(1)).await.unwrap();
        let second = store.insert(new_transaction(2)).await.unwrap();

        match (first, second) {
            (InsertOutcome::Inserted(a), InsertOutcome::Inserted(b)) => {
                assert_eq!(a.id, 1);
                assert_eq!(b.id, 2);
            }
            other => panic!("expected two inserts, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_duplicate_payment_id_is_not_inserted() {
        let store = MemoryTransactionStore::default();
        store.insert(new_transaction(555)).await.unwrap();

        let outcome = store.insert(new_transaction(555)).await.unwrap();

        assert_eq!(outcome, InsertOutcome::Duplicate);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = MemoryTransactionStore::default();
        for payment_id in [10, 20, 30] {
            store.insert(new_transaction(payment_id)).await.unwrap();
        }

        let payment_ids: Vec<i64> = store
            .list_newest_first()
            .await
            .unwrap()
            .iter()
            .map(|row| row.payment_id)
            .collect();

        assert_eq!(payment_ids, vec![30, 20, 10]);
    }
}
