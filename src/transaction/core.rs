//! Defines the core data models and the validation boundary for
//! transactions.
//!
//! All user input enters through [TransactionForm::validate], which turns a
//! bag of raw strings into a [TransactionDraft] or a descriptive error.
//! Everything past the draft assumes well-formed data; the store and the
//! reporting layer never re-validate.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, macros::format_description};

use crate::{Error, category::CategoryName, config::AppConfig};

// ============================================================================
// MODELS
// ============================================================================

/// Identifier for a transaction, assigned by the store at creation and
/// stable for the record's lifetime.
pub type TransactionId = i64;

/// Whether a transaction records money earned or money spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in, e.g. a salary payment.
    Income,
    /// Money going out, e.g. a grocery purchase.
    Expense,
}

impl TransactionKind {
    /// The lowercase string form used in serialized data and form input.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or
/// earned.
///
/// Instances are created by a store from a [TransactionDraft]; edits replace
/// every field except [id](Transaction::id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Always non-negative; the direction of the money flow is carried by
    /// [kind](Transaction::kind).
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// Whether the transaction is income or an expense.
    pub kind: TransactionKind,
    /// The category the transaction belongs to, e.g. "Food".
    pub category: CategoryName,
    /// A text description of what the transaction was for. May be empty.
    pub description: String,
}

impl Transaction {
    /// Create a validated draft for a new transaction.
    ///
    /// Shortcut for [TransactionDraft::new] for discoverability.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidAmount] if `amount` is
    /// negative or not finite.
    pub fn build(
        amount: f64,
        date: Date,
        kind: TransactionKind,
        category: CategoryName,
    ) -> Result<TransactionDraft, Error> {
        TransactionDraft::new(amount, date, kind, category)
    }
}

/// The validated fields of a transaction, minus the store-assigned ID.
///
/// A draft is consumed by [create](super::TransactionStore::create) to make a
/// new transaction, or by [update](super::TransactionStore::update) to
/// replace an existing one wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    /// The non-negative monetary amount.
    pub amount: f64,
    /// The date when the transaction occurred.
    pub date: Date,
    /// Whether the transaction is income or an expense.
    pub kind: TransactionKind,
    /// The category the transaction belongs to.
    pub category: CategoryName,
    /// A human-readable description. Defaults to the empty string.
    pub description: String,
}

impl TransactionDraft {
    /// Create a draft and validate `amount`.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidAmount] if `amount` is
    /// negative or not finite.
    pub fn new(
        amount: f64,
        date: Date,
        kind: TransactionKind,
        category: CategoryName,
    ) -> Result<Self, Error> {
        if amount.is_finite() && amount >= 0.0 {
            Ok(Self {
                amount,
                date,
                kind,
                category,
                description: String::new(),
            })
        } else {
            Err(Error::InvalidAmount(amount))
        }
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

// ============================================================================
// FORM VALIDATION
// ============================================================================

/// Raw form input for creating or editing a transaction.
///
/// Every field is an untyped string exactly as submitted; [validate](Self::validate)
/// is the only way to turn the form into usable data, so malformed input is
/// rejected before it can reach a store or a report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionForm {
    /// The transaction date in `YYYY-MM-DD` form.
    pub date: String,
    /// The transaction kind, "income" or "expense".
    pub kind: String,
    /// The category name.
    pub category: String,
    /// The amount as a decimal string, e.g. "45.50".
    pub amount: String,
    /// Optional free-text description.
    pub description: String,
}

impl TransactionForm {
    /// Parse and validate every field, producing a [TransactionDraft].
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::InvalidDateFormat] if the date is not a valid `YYYY-MM-DD`
    ///   calendar date,
    /// - or [Error::UnknownKind] if the kind is not "income" or "expense",
    /// - or [Error::InvalidAmountFormat] if the amount does not parse as a
    ///   number,
    /// - or [Error::InvalidAmount] if the amount is negative or not finite,
    /// - or [Error::EmptyCategoryName] if the category is empty,
    /// - or [Error::UnknownCategory] if the category is not in the catalog
    ///   and the configured policy is [Closed](crate::config::CategoryPolicy::Closed).
    pub fn validate(&self, config: &AppConfig) -> Result<TransactionDraft, Error> {
        self.validate_fields(config)
            .inspect_err(|error| tracing::warn!("rejected transaction form: {error}"))
    }

    fn validate_fields(&self, config: &AppConfig) -> Result<TransactionDraft, Error> {
        let date = parse_date(&self.date)?;
        let kind = TransactionKind::from_str(&self.kind)?;
        let category = CategoryName::new(&self.category)?;

        if config.category_policy == crate::config::CategoryPolicy::Closed
            && !config.categories.contains(kind, &category)
        {
            return Err(Error::UnknownCategory(category.to_string(), kind));
        }

        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|error: std::num::ParseFloatError| {
                Error::InvalidAmountFormat(error.to_string(), self.amount.clone())
            })?;

        Ok(TransactionDraft::new(amount, date, kind, category)?.description(&self.description))
    }
}

/// Parse a `YYYY-MM-DD` date string.
///
/// # Errors
///
/// This function will return an [Error::InvalidDateFormat] if `raw` is not a
/// valid calendar date in that format.
pub fn parse_date(raw: &str) -> Result<Date, Error> {
    let format = format_description!("[year]-[month]-[day]");

    Date::parse(raw.trim(), &format)
        .map_err(|error| Error::InvalidDateFormat(error.to_string(), raw.to_string()))
}

// ============================================================================
// TESTS
// ============================================================================



#[cfg(test)]
mod form_tests {
    use time::macros::date;

    use crate::{
        Error,
        config::{AppConfig, CategoryPolicy},
    };

    use super::{TransactionForm, TransactionKind, parse_date};

    fn form() -> TransactionForm {
        TransactionForm {
            date: "2024-08-02".to_string(),
            kind: "expense".to_string(),
            category: "food".to_string(),
            amount: "45.50".to_string(),
            description: "Grocery shopping".to_string(),
        }
    }

    #[test]
    fn validate_succeeds_on_well_formed_input() {
        let draft = form().validate(&AppConfig::default()).unwrap();

        assert_eq!(draft.date, date!(2024 - 08 - 02));
        assert_eq!(draft.kind, TransactionKind::Expense);
        assert_eq!(draft.category.as_ref(), "Food");
        assert_eq!(draft.amount, 45.50);
        assert_eq!(draft.description, "Grocery shopping");
    }

    #[test]
    fn validate_fails_on_unparsable_date() {
        let mut bad_date = form();
        bad_date.date = "02/08/2024".to_string();

        let result = bad_date.validate(&AppConfig::default());

        assert!(
            matches!(result, Err(Error::InvalidDateFormat(_, ref raw)) if raw == "02/08/2024"),
            "got {result:?}"
        );
    }

    #[test]
    fn validate_fails_on_impossible_date() {
        let mut bad_date = form();
        bad_date.date = "2024-02-30".to_string();

        assert!(bad_date.validate(&AppConfig::default()).is_err());
    }

    #[test]
    fn validate_fails_on_unknown_kind() {
        let mut bad_kind = form();
        bad_kind.kind = "refund".to_string();

        assert_eq!(
            bad_kind.validate(&AppConfig::default()),
            Err(Error::UnknownKind("refund".to_string()))
        );
    }

    #[test]
    fn validate_fails_on_unparsable_amount() {
        let mut bad_amount = form();
        bad_amount.amount = "45,50".to_string();

        assert!(matches!(
            bad_amount.validate(&AppConfig::default()),
            Err(Error::InvalidAmountFormat(_, ref raw)) if raw == "45,50"
        ));
    }

    #[test]
    fn validate_fails_on_negative_amount() {
        let mut negative = form();
        negative.amount = "-45.50".to_string();

        assert_eq!(
            negative.validate(&AppConfig::default()),
            Err(Error::InvalidAmount(-45.50))
        );
    }

    #[test]
    fn closed_policy_rejects_category_outside_catalog() {
        let mut custom = form();
        custom.category = "snacks".to_string();

        assert_eq!(
            custom.validate(&AppConfig::default()),
            Err(Error::UnknownCategory(
                "Snacks".to_string(),
                TransactionKind::Expense
            ))
        );
    }

    #[test]
    fn closed_policy_checks_catalog_per_kind() {
        // "Salary" is an income category, so it is invalid for an expense.
        let mut mismatched = form();
        mismatched.category = "salary".to_string();

        assert_eq!(
            mismatched.validate(&AppConfig::default()),
            Err(Error::UnknownCategory(
                "Salary".to_string(),
                TransactionKind::Expense
            ))
        );
    }

    #[test]
    fn open_policy_accepts_category_outside_catalog() {
        let config = AppConfig {
            category_policy: CategoryPolicy::Open,
            ..AppConfig::default()
        };
        let mut custom = form();
        custom.category = "snacks".to_string();

        let draft = custom.validate(&config).unwrap();

        assert_eq!(draft.category.as_ref(), "Snacks");
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(parse_date("2024-08-01"), Ok(date!(2024 - 08 - 01)));
        assert_eq!(parse_date(" 2024-12-31 "), Ok(date!(2024 - 12 - 31)));
    }
}
