pub mod transaction;

pub use transaction::{NewTransaction, Transaction};
