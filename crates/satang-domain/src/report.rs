//! Report windows and derived category summaries.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::category::Category;

/// Calendar window a report filters against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportWindow {
    /// Same calendar month and year as the reference.
    Monthly { month: u32, year: i32 },
    /// Same calendar year as the reference.
    Yearly { year: i32 },
}

impl ReportWindow {
    pub fn monthly(month: u32, year: i32) -> Self {
        ReportWindow::Monthly { month, year }
    }

    pub fn yearly(year: i32) -> Self {
        ReportWindow::Yearly { year }
    }

    /// Returns `true` when `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            ReportWindow::Monthly { month, year } => {
                date.month() == month && date.year() == year
            }
            ReportWindow::Yearly { year } => date.year() == year,
        }
    }
}

/// Derived total expense amount for one category inside a report window.
///
/// Recomputed on demand, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub total: f64,
}
