//! Core category domain types.
//!
//! Categories are free-form labels on transactions. Grouping in reports is
//! case-insensitive, so names are canonicalized on construction: "food",
//! "FOOD" and "Food" all become the single category "Food".

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A validated, non-empty category name in canonical display case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name, trimming whitespace and canonicalizing the
    /// case.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is
    /// empty or whitespace only.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(canonicalize(name)))
        }
    }

    /// Create a category name without validation or canonicalization.
    ///
    /// The caller should ensure that the string is non-empty and already in
    /// canonical display case, otherwise equal-ignoring-case names will not
    /// group together in reports.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`,
    /// because if the invariant is violated it will cause incorrect behaviour
    /// but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Lowercase the name, then capitalize the first letter.
fn canonicalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut chars = lowered.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => lowered,
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::CategoryName;

    #[test]
    fn new_fails_on_empty_name() {
        assert_eq!(CategoryName::new(""), Err(Error::EmptyCategoryName));
        assert_eq!(CategoryName::new("   "), Err(Error::EmptyCategoryName));
    }

    #[test]
    fn new_trims_whitespace() {
        let name = CategoryName::new("  food ").unwrap();

        assert_eq!(name.as_ref(), "Food");
    }

    #[test]
    fn new_canonicalizes_case() {
        for raw in ["food", "FOOD", "Food", "fOOD"] {
            let name = CategoryName::new(raw).unwrap();

            assert_eq!(name.as_ref(), "Food", "canonical form of {raw:?}");
        }
    }

    #[test]
    fn equal_ignoring_case_names_compare_equal() {
        let want = CategoryName::new("transportation").unwrap();
        let got = CategoryName::new("Transportation").unwrap();

        assert_eq!(want, got);
    }
}
