//! The mutation surface over the transaction store.

use chrono::NaiveDate;
use tracing::{debug, warn};
use uuid::Uuid;

use satang_domain::{Category, CategorySummary, Displayable, Transaction, TransactionType};

use crate::store::{KeyValueStore, TransactionStore};
use crate::summary_service::SummaryService;
use crate::CoreError;

/// CRUD service over the persisted transaction collection.
///
/// Construct one instance per session and hand it to whichever collaborator
/// needs it; there is no global instance. Every mutating method persists the
/// collection before returning (write-through). Persistence failures are
/// logged and swallowed: the in-memory state stays authoritative for the
/// rest of the session.
///
/// Input is assumed pre-validated (see [`crate::validate::validate_entry`]);
/// the service does not re-check titles or amounts.
pub struct TransactionService<S: KeyValueStore> {
    store: TransactionStore<S>,
}

impl<S: KeyValueStore> TransactionService<S> {
    /// Opens the service over the given backend, loading persisted state.
    pub fn new(backend: S) -> Self {
        Self {
            store: TransactionStore::open(backend),
        }
    }

    /// Current collection, newest entries first.
    pub fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    /// Records a new transaction at the head of the collection and returns
    /// its identifier.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        amount: f64,
        kind: TransactionType,
        category: Category,
        date: NaiveDate,
    ) -> Uuid {
        let transaction = Transaction::new(title, amount, kind, category, date);
        let id = transaction.id;
        debug!("adding {}", transaction.display_label());
        self.store.insert_front(transaction);
        self.persist_after_mutation();
        id
    }

    /// Replaces the whole record with matching `id`, preserving its list
    /// position. Unknown identifiers surface as
    /// [`CoreError::TransactionNotFound`].
    pub fn update(
        &mut self,
        id: Uuid,
        title: impl Into<String>,
        amount: f64,
        kind: TransactionType,
        category: Category,
        date: NaiveDate,
    ) -> Result<(), CoreError> {
        let replacement = self
            .store
            .find(id)
            .ok_or(CoreError::TransactionNotFound(id))?
            .replaced_with(title, amount, kind, category, date);
        self.store.replace(replacement)?;
        self.persist_after_mutation();
        Ok(())
    }

    /// Removes the transaction with the given identifier, returning it.
    pub fn remove(&mut self, id: Uuid) -> Result<Transaction, CoreError> {
        let removed = self.store.remove(id)?;
        debug!("removed {}", removed.display_label());
        self.persist_after_mutation();
        Ok(removed)
    }

    /// Removes the entries at the given positions in the current ordered
    /// view, returning how many were removed.
    pub fn remove_positions(&mut self, positions: &[usize]) -> usize {
        let removed = self.store.remove_positions(positions);
        if removed > 0 {
            self.persist_after_mutation();
        }
        removed
    }

    /// Net balance: income total minus expense total over the whole
    /// collection. Recomputed on every access.
    pub fn balance(&self) -> f64 {
        self.store
            .transactions()
            .iter()
            .map(Transaction::signed_amount)
            .sum()
    }

    /// Expense totals per category for the given calendar month.
    pub fn monthly_summary(&self, month: u32, year: i32) -> Vec<CategorySummary> {
        SummaryService::monthly_category_summary(self.store.transactions(), month, year)
    }

    /// Expense totals per category for the given calendar year.
    pub fn yearly_summary(&self, year: i32) -> Vec<CategorySummary> {
        SummaryService::yearly_category_summary(self.store.transactions(), year)
    }

    fn persist_after_mutation(&self) {
        if let Err(err) = self.store.persist() {
            warn!("failed to persist transactions: {err}");
        }
    }
}
