//! Test doubles for the gateway and store ports.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::gateway::{GatewayError, Payer, PaymentDetails, PaymentGateway};
use crate::models::{NewTransaction, Transaction};
use crate::state::AppState;
use crate::store::memory::MemoryTransactionStore;
use crate::store::{InsertOutcome, StoreError, TransactionStore};

pub fn approved_payment(id: i64) -> PaymentDetails {
    PaymentDetails {
        id: Some(id),
        status: Some("approved".to_string()),
        date_approved: Some("2024-01-01T00:00:00Z".to_string()),
        transaction_amount: Some(99.5),
        currency_id: Some("ARS".to_string()),
        description: Some("Order #1".to_string()),
        payer: Some(Payer {
            email: Some("a@b.com".to_string()),
        }),
    }
}

enum StubResponse {
    Payment(PaymentDetails),
    Status(StatusCode),
}

/// Answers lookups from a fixed table; unknown ids get a 404.
#[derive(Default)]
pub struct StubGateway {
    responses: HashMap<i64, StubResponse>,
    calls: AtomicUsize,
}

impl StubGateway {
    pub fn with_payment(mut self, id: i64, details: PaymentDetails) -> Self {
        self.responses.insert(id, StubResponse::Payment(details));
        self
    }

    pub fn with_status(mut self, id: i64, status: StatusCode) -> Self {
        self.responses.insert(id, StubResponse::Status(status));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn fetch_payment(&self, payment_id: i64) -> Result<PaymentDetails, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(&payment_id) {
            Some(StubResponse::Payment(details)) => Ok(details.clone()),
            Some(StubResponse::Status(status)) => Err(GatewayError::UnexpectedStatus(*status)),
            None => Err(GatewayError::UnexpectedStatus(StatusCode::NOT_FOUND)),
        }
    }
}

/// Store whose every call fails as if the pool were exhausted.
pub struct FailingStore;

#[async_trait]
impl TransactionStore for FailingStore {
    async fn insert(&self, _transaction: NewTransaction) -> Result<InsertOutcome, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list_newest_first(&self) -> Result<Vec<Transaction>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub fn test_state(
    gateway: StubGateway,
) -> (AppState, Arc<MemoryTransactionStore>, Arc<StubGateway>) {
    let store = Arc::new(MemoryTransactionStore::default());
    let gateway = Arc::new(gateway);
    let state = AppState::new(store.clone(), gateway.clone());
    (state, store, gateway)
}
