//! Defines how transactions are fetched from a store.

use std::ops::RangeInclusive;

use time::Date;

use super::core::{Transaction, TransactionKind};

/// Defines which transactions [get_query](super::TransactionStore::get_query)
/// returns, and in what order.
///
/// The default query selects every transaction in storage order (newest
/// first).
#[derive(Debug, Default)]
pub struct TransactionQuery {
    /// Include transactions whose date falls within `date_range` (inclusive).
    pub date_range: Option<RangeInclusive<Date>>,
    /// Include only transactions of this kind.
    pub kind: Option<TransactionKind>,
    /// Selects up to the first N (`limit`) transactions.
    pub limit: Option<u64>,
    /// Orders transactions by date in the order `sort_date`. None returns
    /// transactions in the order they are stored.
    pub sort_date: Option<SortOrder>,
}

impl TransactionQuery {
    /// Whether `transaction` passes the query's filters.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(range) = &self.date_range {
            if !range.contains(&transaction.date) {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if transaction.kind != kind {
                return false;
            }
        }

        true
    }
}

/// The order to sort transactions in a [TransactionQuery].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort in order of increasing value.
    Ascending,
    /// Sort in order of decreasing value.
    Descending,
}
