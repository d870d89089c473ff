//! Transaction data aggregation for summary cards and charts.
//!
//! Every function here is a pure transformation over a slice of validated
//! transactions: no internal state, no clocks, no side effects. Results are
//! deterministic, so aggregating the same collection twice yields identical
//! values.

use std::collections::HashMap;

use time::Date;

use crate::{
    category::CategoryName,
    transaction::{Transaction, TransactionKind, trailing_range},
};

use super::models::{CategoryShare, MonthlySummary, Report, Summary};

/// Calculates total income, total expenses, and the balance.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => total_income += transaction.amount,
            TransactionKind::Expense => total_expenses += transaction.amount,
        }
    }

    Summary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
    }
}

/// Aggregates income and expense amounts per calendar month.
///
/// # Returns
/// One entry per month that has at least one transaction, in chronological
/// order. Empty input produces an empty series.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlySummary> {
    let mut totals: HashMap<Date, (f64, f64)> = HashMap::new();

    for transaction in transactions {
        let month = transaction
            .date
            .replace_day(1)
            .expect("day 1 is valid in every month");
        let entry = totals.entry(month).or_insert((0.0, 0.0));

        match transaction.kind {
            TransactionKind::Income => entry.0 += transaction.amount,
            TransactionKind::Expense => entry.1 += transaction.amount,
        }
    }

    let mut months: Vec<Date> = totals.keys().copied().collect();
    months.sort();

    months
        .into_iter()
        .map(|month| {
            let (income, expenses) = totals[&month];

            MonthlySummary {
                month,
                income,
                expenses,
            }
        })
        .collect()
}

/// Groups expense transactions by category and calculates each category's
/// share of the total.
///
/// Income transactions are ignored. Categories were canonicalized at the
/// validation boundary, so names differing only in case land in the same
/// group here.
///
/// # Returns
/// One entry per expense category, ordered by descending total and then by
/// name for deterministic output.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let mut totals: HashMap<CategoryName, f64> = HashMap::new();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }

        *totals.entry(transaction.category.clone()).or_insert(0.0) += transaction.amount;
    }

    let total_expenses: f64 = totals.values().sum();

    let mut shares: Vec<CategoryShare> = totals
        .into_iter()
        .map(|(category, total)| CategoryShare {
            category,
            total,
            percent: percent_of(total, total_expenses),
        })
        .collect();

    shares.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.as_ref().cmp(b.category.as_ref()))
    });

    shares
}

/// The transactions whose date falls within the trailing `days`-day window
/// ending at `reference`, inclusive on both ends.
pub fn filter_trailing_window(
    transactions: &[Transaction],
    days: i64,
    reference: Date,
) -> Vec<Transaction> {
    let range = trailing_range(days, reference);

    transactions
        .iter()
        .filter(|transaction| range.contains(&transaction.date))
        .cloned()
        .collect()
}

/// Produce all three reporting views over one collection.
///
/// When `window_days` is set, only transactions within the trailing window
/// ending at `reference` are considered; otherwise the whole collection is
/// reported. `reference` is injected rather than read from the clock so that
/// results are reproducible; interactive callers pass [crate::today_utc].
pub fn build_report(
    transactions: &[Transaction],
    window_days: Option<i64>,
    reference: Date,
) -> Report {
    let filtered;
    let visible = match window_days {
        Some(days) => {
            filtered = filter_trailing_window(transactions, days, reference);
            filtered.as_slice()
        }
        None => transactions,
    };

    Report {
        summary: summarize(visible),
        monthly: monthly_series(visible),
        categories: category_breakdown(visible),
    }
}

fn percent_of(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        (value / total) * 100.0
    }
}
