//! Application configuration.
//!
//! The config is plain data owned by the embedding application and passed by
//! reference to the validation boundary. There is no ambient or global
//! configuration.

use serde::{Deserialize, Serialize};

use crate::{
    category::CategoryName,
    transaction::{TransactionKind, WindowPreset},
};

/// How category names outside the configured catalog are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryPolicy {
    /// Only categories listed in the [CategoryCatalog] are accepted.
    Closed,
    /// Any non-empty category name is accepted; unknown names form their own
    /// groups in reports.
    Open,
}

impl Default for CategoryPolicy {
    fn default() -> Self {
        Self::Closed
    }
}

/// The category lists offered for each transaction kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    /// Categories selectable for income transactions.
    pub income: Vec<CategoryName>,
    /// Categories selectable for expense transactions.
    pub expenses: Vec<CategoryName>,
}

impl CategoryCatalog {
    /// The categories offered for transactions of `kind`.
    pub fn for_kind(&self, kind: TransactionKind) -> &[CategoryName] {
        match kind {
            TransactionKind::Income => &self.income,
            TransactionKind::Expense => &self.expenses,
        }
    }

    /// Whether `category` is listed for transactions of `kind`.
    pub fn contains(&self, kind: TransactionKind, category: &CategoryName) -> bool {
        self.for_kind(kind).contains(category)
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        let names = |raw: &[&str]| raw.iter().map(|name| CategoryName::new_unchecked(name)).collect();

        Self {
            income: names(&[
                "Salary",
                "Freelance",
                "Investment",
                "Business",
                "Gift",
                "Other",
            ]),
            expenses: names(&[
                "Food",
                "Transportation",
                "Housing",
                "Entertainment",
                "Healthcare",
                "Shopping",
                "Utilities",
                "Other",
            ]),
        }
    }
}

/// Application-wide settings, injected by reference wherever they are needed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Whether categories outside the catalog are accepted.
    #[serde(default)]
    pub category_policy: CategoryPolicy,
    /// The category lists offered for each transaction kind.
    #[serde(default)]
    pub categories: CategoryCatalog,
    /// The reporting window selected when the user has not chosen one.
    #[serde(default)]
    pub default_window: WindowPreset,
}
