use std::sync::Arc;

use crate::gateway::PaymentGateway;
use crate::store::TransactionStore;

/// Dependencies shared by every handler, built once in `main`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TransactionStore>,
    pub gateway: Arc<dyn PaymentGateway>,
}

impl AppState {
    pub fn new(store: Arc<dyn TransactionStore>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { store, gateway }
    }
}
