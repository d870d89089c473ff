//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model, `TransactionDraft` and the `TransactionForm`
//!   validation boundary
//! - The `TransactionStore` trait and its in-memory implementation
//! - Query and trailing-window helpers for fetching and filtering records

mod core;
mod query;
mod store;
mod window;

pub use core::{
    Transaction, TransactionDraft, TransactionForm, TransactionId, TransactionKind, parse_date,
};
pub use query::{SortOrder, TransactionQuery};
pub use store::{MemoryTransactionStore, TransactionStore};
pub use window::{WindowPreset, trailing_range};
