pub mod json_backend;

use crate::{domain::Transaction, errors::Result};

/// Abstraction over persistence backends capable of storing the transaction
/// collection. Every save is a full-collection overwrite; there are no
/// incremental writes.
pub trait StorageBackend: Send + Sync {
    fn save(&self, transactions: &[Transaction]) -> Result<()>;
    fn load(&self) -> Result<Vec<Transaction>>;
    /// Whether a persisted collection exists at all. Lets the store
    /// distinguish "first run" from "stored but unreadable".
    fn exists(&self) -> bool;
}

pub use json_backend::JsonStorage;
