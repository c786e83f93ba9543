//! # Search Keywords
//!
//! Classifies a user-typed keyword into the kind of match the store runs.
//!
//! ## Dual-Mode Matching
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Keyword Classification                               │
//! │                                                                         │
//! │  ""          ──► Empty     : nothing matches                            │
//! │  "7", "007"  ──► IdOrName  : id = 7  OR  name contains "7"/"007"        │
//! │  "Wid"       ──► Name      : name contains "Wid"                        │
//! │  "100%"      ──► Name      : name contains "100%" (literal percent)     │
//! │  " 7"        ──► Name      : not all digits, no trimming                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The keyword is never spliced into SQL. It is bound as a parameter and
//! compared with a plain substring test, so no character is a wildcard.

use crate::types::ProductId;

/// How a keyword should be matched against the products table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchKeyword<'a> {
    /// Empty input. Matches nothing.
    Empty,

    /// All ASCII digits: match the id exactly, or the name by substring.
    IdOrName { id: ProductId, text: &'a str },

    /// Anything else: match the name by substring.
    Name { text: &'a str },
}

impl<'a> SearchKeyword<'a> {
    /// Classifies a raw keyword.
    ///
    /// An all-digit keyword whose value does not fit in a [`ProductId`]
    /// falls back to a name match, since no stored id can equal it.
    ///
    /// ## Example
    /// ```rust
    /// use inventory_core::search::SearchKeyword;
    ///
    /// assert_eq!(
    ///     SearchKeyword::classify("007"),
    ///     SearchKeyword::IdOrName { id: 7, text: "007" }
    /// );
    /// assert_eq!(SearchKeyword::classify("Wid"), SearchKeyword::Name { text: "Wid" });
    /// ```
    pub fn classify(keyword: &'a str) -> Self {
        if keyword.is_empty() {
            return SearchKeyword::Empty;
        }

        if keyword.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(id) = keyword.parse::<ProductId>() {
                return SearchKeyword::IdOrName { id, text: keyword };
            }
        }

        SearchKeyword::Name { text: keyword }
    }

    /// Returns the text to match against product names, if any.
    pub fn text(&self) -> Option<&'a str> {
        match self {
            SearchKeyword::Empty => None,
            SearchKeyword::IdOrName { text, .. } | SearchKeyword::Name { text } => Some(*text),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
