//! Fintrack is the core of a personal finance tracker: typed income/expense
//! transactions, an in-memory store with CRUD and query operations, and a
//! pure reporting layer that derives summary totals, a monthly series, and a
//! category breakdown from the stored records.
//!
//! The crate has no rendering technology and no network surface. A UI layer
//! owns an [AppConfig](config::AppConfig), a
//! [MemoryTransactionStore](transaction::MemoryTransactionStore) and a
//! [SessionStore](session::SessionStore), validates user input through
//! [TransactionForm](transaction::TransactionForm), and renders the views
//! returned by [report::build_report].

#![warn(missing_docs)]

use time::Date;

pub mod category;
pub mod config;
pub mod format;
pub mod report;
pub mod session;
pub mod transaction;

pub use category::CategoryName;
pub use config::{AppConfig, CategoryCatalog, CategoryPolicy};
pub use report::{Report, build_report};
pub use session::SessionStore;
pub use transaction::{
    MemoryTransactionStore, Transaction, TransactionDraft, TransactionForm, TransactionKind,
    TransactionStore,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The amount is negative or not a finite number.
    ///
    /// Amounts are stored unsigned; whether money came in or went out is
    /// carried by the transaction kind.
    #[error("{0} is not a valid transaction amount")]
    InvalidAmount(f64),

    /// There was an error parsing a date string from user input.
    ///
    /// Callers should pass in the original error as a string and the date
    /// string that caused the error.
    #[error("could not parse \"{1}\" as a date: {0}")]
    InvalidDateFormat(String, String),

    /// There was an error parsing an amount string from user input.
    #[error("could not parse \"{1}\" as an amount: {0}")]
    InvalidAmountFormat(String, String),

    /// A string other than "income" or "expense" was used as a transaction
    /// kind.
    #[error("\"{0}\" is not a valid transaction kind")]
    UnknownKind(String),

    /// An empty string was used to create a category name.
    #[error("category name cannot be empty")]
    EmptyCategoryName,

    /// The category is not part of the configured category catalog.
    ///
    /// Only returned when the category policy is
    /// [Closed](config::CategoryPolicy::Closed).
    #[error("\"{0}\" is not one of the configured {1} categories")]
    UnknownCategory(String, TransactionKind),

    /// The email address used to sign in does not have a local part and a
    /// domain separated by '@'.
    #[error("\"{0}\" is not a valid email address")]
    InvalidEmail(String),

    /// The requested resource could not be found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist.
    #[error("tried to update a transaction that is not in the store")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist.
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,

    /// An error occurred while serializing a struct as JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// An error occurred while reading a JSON snapshot back into memory.
    #[error("could not parse JSON snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Today's date in UTC.
///
/// Convenience for callers that do not need an injected reference date.
/// Reporting functions take the reference date as an explicit argument so
/// that results are reproducible; pass a fixed date in tests.
pub fn today_utc() -> Date {
    time::OffsetDateTime::now_utc().date()
}
