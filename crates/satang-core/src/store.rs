//! The key-value persistence primitive and the transaction store built on it.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tracing::warn;
use uuid::Uuid;

use satang_domain::{Identifiable, Transaction};

use crate::CoreError;

/// Fixed key the transaction collection is persisted under.
pub const TRANSACTIONS_KEY: &str = "saved_transactions";

/// Abstraction over platform key-value persistence backends.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CoreError>;
    fn set(&self, key: &str, value: &[u8]) -> Result<(), CoreError>;
}

/// In-memory backend for tests and ephemeral sessions.
///
/// Clones share the same underlying map, so a store reopened from a clone
/// sees previously persisted data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Owns the authoritative in-memory ordered transaction list and its
/// persistence slot.
///
/// The collection keeps insertion order with newest entries at the head.
/// Loading recovers silently: a missing key or malformed payload yields an
/// empty list, and the failure is only logged.
pub struct TransactionStore<S: KeyValueStore> {
    backend: S,
    transactions: Vec<Transaction>,
}

impl<S: KeyValueStore> TransactionStore<S> {
    /// Opens the store, reading whatever is persisted under the fixed key.
    pub fn open(backend: S) -> Self {
        let transactions: Vec<Transaction> = match backend.get(TRANSACTIONS_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(list) => list,
                Err(err) => {
                    warn!("discarding malformed transaction payload: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("failed to read persisted transactions: {err}");
                Vec::new()
            }
        };
        Self {
            backend,
            transactions,
        }
    }

    /// Snapshot of the collection in its current order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Writes the full collection to the fixed key, replacing the previous
    /// value. Callers decide whether a failure is fatal; the in-memory list
    /// stays authoritative either way.
    pub fn persist(&self) -> Result<(), CoreError> {
        let bytes = serde_json::to_vec_pretty(&self.transactions)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        self.backend.set(TRANSACTIONS_KEY, &bytes)
    }

    /// Places a new entry at the head of the collection.
    pub fn insert_front(&mut self, transaction: Transaction) {
        self.transactions.insert(0, transaction);
    }

    /// Looks up an entry by identifier.
    pub fn find(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id() == id)
    }

    /// Replaces the entry sharing `replacement`'s identifier, keeping its
    /// list position.
    pub fn replace(&mut self, replacement: Transaction) -> Result<(), CoreError> {
        let position = self
            .transactions
            .iter()
            .position(|txn| txn.id() == replacement.id)
            .ok_or(CoreError::TransactionNotFound(replacement.id))?;
        self.transactions[position] = replacement;
        Ok(())
    }

    /// Removes the entry with the given identifier, returning it.
    pub fn remove(&mut self, id: Uuid) -> Result<Transaction, CoreError> {
        let position = self
            .transactions
            .iter()
            .position(|txn| txn.id() == id)
            .ok_or(CoreError::TransactionNotFound(id))?;
        Ok(self.transactions.remove(position))
    }

    /// Removes the entries at the given positions in the current ordered
    /// view. Out-of-range and duplicate positions are ignored. Returns how
    /// many entries were removed.
    pub fn remove_positions(&mut self, positions: &[usize]) -> usize {
        let mut sorted: Vec<usize> = positions
            .iter()
            .copied()
            .filter(|&idx| idx < self.transactions.len())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();
        for idx in sorted.iter().rev() {
            self.transactions.remove(*idx);
        }
        sorted.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use satang_domain::{Category, TransactionType};

    fn sample(title: &str) -> Transaction {
        Transaction::new(
            title,
            10.0,
            TransactionType::Expense,
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        )
    }

    #[test]
    fn open_with_empty_backend_yields_empty_list() {
        let store = TransactionStore::open(MemoryStore::default());
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn open_recovers_from_malformed_payload() {
        let backend = MemoryStore::default();
        backend.set(TRANSACTIONS_KEY, b"{not json").unwrap();
        let store = TransactionStore::open(backend);
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn persisted_collection_round_trips() {
        let backend = MemoryStore::default();
        let mut store = TransactionStore::open(backend.clone());
        store.insert_front(sample("A"));
        store.insert_front(sample("B"));
        store.persist().unwrap();

        let reopened = TransactionStore::open(backend);
        assert_eq!(reopened.transactions(), store.transactions());
    }

    #[test]
    fn persist_is_idempotent() {
        let backend = MemoryStore::default();
        let mut store = TransactionStore::open(backend.clone());
        store.insert_front(sample("A"));

        store.persist().unwrap();
        let first = backend.get(TRANSACTIONS_KEY).unwrap().unwrap();
        store.persist().unwrap();
        let second = backend.get(TRANSACTIONS_KEY).unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn insert_front_places_newest_first() {
        let mut store = TransactionStore::open(MemoryStore::default());
        store.insert_front(sample("A"));
        store.insert_front(sample("B"));
        assert_eq!(store.transactions()[0].title, "B");
        assert_eq!(store.transactions()[1].title, "A");
    }

    #[test]
    fn remove_positions_ignores_out_of_range_and_duplicates() {
        let mut store = TransactionStore::open(MemoryStore::default());
        store.insert_front(sample("A"));
        store.insert_front(sample("B"));
        store.insert_front(sample("C"));

        let removed = store.remove_positions(&[2, 0, 0, 9]);
        assert_eq!(removed, 2);
        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.transactions()[0].title, "B");
    }
}
