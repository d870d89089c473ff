//! Defines the transaction store trait and its in-memory implementation.
//!
//! The store is an explicitly owned object: whoever needs transactions is
//! handed a reference, there is no global collection. The in-memory store
//! keeps records newest first and can round-trip its contents through a JSON
//! snapshot so an embedder can persist them wherever it likes (a file, the
//! browser's local storage, or not at all).

use serde::{Deserialize, Serialize};

use crate::Error;

use super::{
    core::{Transaction, TransactionDraft, TransactionId},
    query::{SortOrder, TransactionQuery},
};

/// Handles the creation, retrieval and mutation of transactions.
pub trait TransactionStore {
    /// Create a new transaction in the store from a validated draft.
    ///
    /// The store assigns the ID and places the new transaction at the front
    /// of the collection.
    fn create(&mut self, draft: TransactionDraft) -> Result<Transaction, Error>;

    /// Retrieve a transaction from the store.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::NotFound] if `id` does not refer
    /// to a stored transaction.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Replace every field except the ID of the transaction `id`.
    ///
    /// The transaction keeps its position in the collection.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::UpdateMissingTransaction] if `id`
    /// does not refer to a stored transaction.
    fn update(&mut self, id: TransactionId, draft: TransactionDraft) -> Result<Transaction, Error>;

    /// Remove the transaction `id` from the store.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::DeleteMissingTransaction] if `id`
    /// does not refer to a stored transaction.
    fn delete(&mut self, id: TransactionId) -> Result<(), Error>;

    /// Retrieve transactions from the store in the way defined by `query`.
    fn get_query(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error>;
}

/// An in-memory [TransactionStore] holding records newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryTransactionStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Default for MemoryTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store seeded with the demo records shown to first-time
    /// users.
    pub fn with_demo_data() -> Self {
        use time::macros::date;

        use crate::category::CategoryName;
        use crate::transaction::TransactionKind;

        let mut store = Self::new();
        let demo = [
            (
                5000.0,
                date!(2024 - 08 - 01),
                TransactionKind::Income,
                "Salary",
                "Monthly salary",
            ),
            (
                45.50,
                date!(2024 - 08 - 02),
                TransactionKind::Expense,
                "Food",
                "Grocery shopping",
            ),
            (
                25.00,
                date!(2024 - 08 - 03),
                TransactionKind::Expense,
                "Transportation",
                "Gas station",
            ),
            (
                800.0,
                date!(2024 - 08 - 04),
                TransactionKind::Income,
                "Freelance",
                "Website development",
            ),
        ];

        for (amount, date, kind, category, description) in demo {
            let draft = TransactionDraft::new(
                amount,
                date,
                kind,
                CategoryName::new_unchecked(category),
            )
            .expect("demo amounts are non-negative")
            .description(description);

            store
                .create(draft)
                .expect("creating a demo transaction cannot fail");
        }

        store
    }

    /// All stored transactions, newest first.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of stored transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Serialize the store contents as a JSON snapshot.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::JSONSerializationError] if the
    /// contents cannot be serialized.
    pub fn snapshot(&self) -> Result<String, Error> {
        serde_json::to_string(&self.transactions)
            .inspect_err(|error| tracing::error!("could not serialize store snapshot: {error}"))
            .map_err(|error| Error::JSONSerializationError(error.to_string()))
    }

    /// Replace the store contents with those from a JSON snapshot.
    ///
    /// The ID counter resumes after the highest restored ID, so records
    /// created afterwards never collide with restored ones.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidSnapshot] if `snapshot` is
    /// not valid JSON for a list of transactions. The store is left
    /// unchanged on error.
    pub fn restore(&mut self, snapshot: &str) -> Result<(), Error> {
        let transactions: Vec<Transaction> = serde_json::from_str(snapshot)
            .inspect_err(|error| tracing::error!("could not parse store snapshot: {error}"))
            .map_err(|error| Error::InvalidSnapshot(error.to_string()))?;

        self.next_id = transactions
            .iter()
            .map(|transaction| transaction.id)
            .max()
            .unwrap_or(0)
            + 1;
        self.transactions = transactions;

        tracing::debug!("restored {} transactions from snapshot", self.len());

        Ok(())
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions
            .iter()
            .position(|transaction| transaction.id == id)
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn create(&mut self, draft: TransactionDraft) -> Result<Transaction, Error> {
        let transaction = Transaction {
            id: self.next_id,
            amount: draft.amount,
            date: draft.date,
            kind: draft.kind,
            category: draft.category,
            description: draft.description,
        };

        self.next_id += 1;
        self.transactions.insert(0, transaction.clone());

        tracing::debug!(
            "created {} transaction {} of {} on {}",
            transaction.kind,
            transaction.id,
            transaction.amount,
            transaction.date
        );

        Ok(transaction)
    }

    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.position(id)
            .map(|index| self.transactions[index].clone())
            .ok_or(Error::NotFound)
    }

    fn update(
        &mut self,
        id: TransactionId,
        draft: TransactionDraft,
    ) -> Result<Transaction, Error> {
        let index = self.position(id).ok_or(Error::UpdateMissingTransaction)?;

        let transaction = Transaction {
            id,
            amount: draft.amount,
            date: draft.date,
            kind: draft.kind,
            category: draft.category,
            description: draft.description,
        };
        self.transactions[index] = transaction.clone();

        tracing::debug!("updated transaction {id}");

        Ok(transaction)
    }

    fn delete(&mut self, id: TransactionId) -> Result<(), Error> {
        let index = self.position(id).ok_or(Error::DeleteMissingTransaction)?;

        self.transactions.remove(index);

        tracing::debug!("deleted transaction {id}");

        Ok(())
    }

    fn get_query(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error> {
        let mut results: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|transaction| query.matches(transaction))
            .cloned()
            .collect();

        // Sort by date, and then ID to keep transaction order stable after
        // updates.
        match query.sort_date {
            Some(SortOrder::Ascending) => {
                results.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
            }
            Some(SortOrder::Descending) => {
                results.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
            }
            None => {}
        }

        if let Some(limit) = query.limit {
            results.truncate(limit as usize);
        }

        Ok(results)
    }
}
