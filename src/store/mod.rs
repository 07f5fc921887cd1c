//! The in-memory transaction collection and its persistence glue.
//!
//! The store owns the collection and an injected [`StorageBackend`]; every
//! mutation rewrites the whole persisted collection, then notifies
//! subscribed observers. There is no ambient global state: anything that
//! needs the data holds a reference to the store.

pub mod seed;

use uuid::Uuid;

use crate::{
    domain::{Transaction, TransactionDraft, TransactionPatch},
    errors::{Result, SpendbookError},
    storage::StorageBackend,
};

/// Callback invoked after every mutation of the collection. Carries no
/// payload; observers re-read whatever view of the store they need.
pub type StoreObserver = Box<dyn Fn() + Send + Sync>;

pub struct TransactionStore {
    transactions: Vec<Transaction>,
    backend: Box<dyn StorageBackend>,
    observers: Vec<StoreObserver>,
}

impl TransactionStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            transactions: Vec::new(),
            backend,
            observers: Vec::new(),
        }
    }

    /// Reads the collection from storage.
    ///
    /// A missing file means first run: the demo dataset is seeded and
    /// persisted. Unreadable stored data also falls back to the demo
    /// dataset, and the fallback is re-persisted so the next load agrees
    /// with what is in memory.
    pub fn load(&mut self) -> Result<()> {
        if !self.backend.exists() {
            self.transactions = seed::demo_transactions();
            self.backend.save(&self.transactions)?;
            tracing::info!(count = self.transactions.len(), "seeded demo transactions");
            return Ok(());
        }
        match self.backend.load() {
            Ok(transactions) => {
                self.transactions = transactions;
                Ok(())
            }
            Err(SpendbookError::MalformedData(reason)) => {
                tracing::warn!(%reason, "stored transactions unreadable; restoring demo data");
                self.transactions = seed::demo_transactions();
                self.backend.save(&self.transactions)?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Re-reads from storage and notifies observers. Used when another view
    /// may have written behind this store's back.
    pub fn reload(&mut self) -> Result<()> {
        self.load()?;
        self.notify();
        Ok(())
    }

    /// The collection in insertion order (newest first).
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Display view: sorted by date descending. Ties keep insertion order.
    pub fn by_date_desc(&self) -> Vec<&Transaction> {
        let mut view: Vec<&Transaction> = self.transactions.iter().collect();
        view.sort_by(|a, b| b.date.cmp(&a.date));
        view
    }

    pub fn get(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Assigns a fresh id, prepends the record, and persists. Returns the id
    /// of the new record.
    pub fn add(&mut self, draft: TransactionDraft) -> Result<Uuid> {
        let transaction = Transaction::new(draft);
        let id = transaction.id;
        self.transactions.insert(0, transaction);
        self.persist()?;
        self.notify();
        Ok(id)
    }

    /// Applies the patch to the matching record. Returns `false` (silent
    /// no-op, nothing persisted) when the id is not present.
    pub fn update(&mut self, id: Uuid, patch: TransactionPatch) -> Result<bool> {
        let Some(transaction) = self.transactions.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        transaction.apply(patch);
        self.persist()?;
        self.notify();
        Ok(true)
    }

    /// Removes the matching record. Returns `false` when the id is absent.
    pub fn remove(&mut self, id: Uuid) -> Result<bool> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        if self.transactions.len() == before {
            return Ok(false);
        }
        self.persist()?;
        self.notify();
        Ok(true)
    }

    /// Registers an observer invoked after every mutation.
    pub fn subscribe(&mut self, observer: StoreObserver) {
        self.observers.push(observer);
    }

    fn persist(&self) -> Result<()> {
        self.backend.save(&self.transactions)
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer();
        }
    }
}
