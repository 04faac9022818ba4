//! Domain models for recorded income and expense entries.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::Category;
use crate::common::{Displayable, Identifiable};

/// A single recorded income or expense event.
///
/// `amount` is always a positive magnitude; the sign is implied by `kind`.
/// The persisted form uses `type` as the field name for `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: Category,
    pub date: NaiveDate,
}

impl Transaction {
    /// Creates a new transaction with a freshly generated identifier.
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        kind: TransactionType,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            amount,
            kind,
            category,
            date,
        }
    }

    /// Rebuilds the record with new field values but the same identifier.
    pub fn replaced_with(
        &self,
        title: impl Into<String>,
        amount: f64,
        kind: TransactionType,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: self.id,
            title: title.into(),
            amount,
            kind,
            category,
            date,
        }
    }

    /// Signed contribution of this entry to the running balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} ({}, {})", self.title, self.kind, self.category)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Distinguishes money coming in from money going out.
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        };
        f.write_str(label)
    }
}
