//! Aggregation of expense transactions into per-category summaries.

use std::{cmp::Ordering, collections::HashMap};

use satang_domain::{Category, CategorySummary, ReportWindow, Transaction, TransactionType};

/// Stateless aggregation over a transaction snapshot.
///
/// The engine never mutates the collection and never rounds; percentage
/// calculations belong to the consumers of the returned summaries.
pub struct SummaryService;

impl SummaryService {
    /// Expense totals per category for the given calendar month and year,
    /// sorted by total descending. Ties are in unspecified order.
    pub fn monthly_category_summary(
        transactions: &[Transaction],
        month: u32,
        year: i32,
    ) -> Vec<CategorySummary> {
        Self::group_expenses(transactions, ReportWindow::monthly(month, year))
    }

    /// Expense totals per category for the given calendar year, sorted by
    /// total descending.
    pub fn yearly_category_summary(transactions: &[Transaction], year: i32) -> Vec<CategorySummary> {
        Self::group_expenses(transactions, ReportWindow::yearly(year))
    }

    /// Sum over a summary sequence, for percentage-of-total displays.
    pub fn grand_total(summaries: &[CategorySummary]) -> f64 {
        summaries.iter().map(|entry| entry.total).sum()
    }

    fn group_expenses(transactions: &[Transaction], window: ReportWindow) -> Vec<CategorySummary> {
        let mut grouping: HashMap<Category, f64> = HashMap::new();
        for transaction in transactions
            .iter()
            .filter(|txn| txn.kind == TransactionType::Expense && window.contains(txn.date))
        {
            *grouping.entry(transaction.category).or_insert(0.0) += transaction.amount;
        }
        let mut summaries: Vec<CategorySummary> = grouping
            .into_iter()
            .map(|(category, total)| CategorySummary { category, total })
            .collect();
        summaries.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
        summaries
    }
}
