//! The derived reporting views.
//!
//! These are plain values recomputed on every read and never persisted. The
//! presentation layer renders them directly; none of them hold references
//! back into the store.

use serde::Serialize;
use time::Date;

use crate::{category::CategoryName, format};

/// Totals over a collection of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts.
    pub total_expenses: f64,
    /// `total_income - total_expenses`. Negative when more was spent than
    /// earned.
    pub balance: f64,
}

/// One calendar month's income and expense totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// The month, represented as its first day.
    pub month: Date,
    /// The sum of income amounts in this month.
    pub income: f64,
    /// The sum of expense amounts in this month.
    pub expenses: f64,
}

impl MonthlySummary {
    /// The chart label for this month, e.g. "Aug 24".
    pub fn label(&self) -> String {
        format::month_label(self.month)
    }
}

/// One category's share of the total expenses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    /// The canonical category name.
    pub category: CategoryName,
    /// The sum of expense amounts in this category.
    pub total: f64,
    /// This category's percentage of all expenses, in `[0, 100]`. Zero when
    /// there are no expenses at all.
    pub percent: f64,
}

/// The three derived views produced by [build_report](super::build_report).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Overall totals for the reported period.
    pub summary: Summary,
    /// Income and expenses per calendar month, chronologically ascending.
    pub monthly: Vec<MonthlySummary>,
    /// Expense totals per category, largest first.
    pub categories: Vec<CategoryShare>,
}
