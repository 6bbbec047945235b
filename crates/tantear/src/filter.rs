//! Text predicates for filtered queries.

use crate::result::{TantearError, TantearResult};
use regex::Regex;
use std::fmt;

/// Predicate applied to a node's rendered text when narrowing a scope.
///
/// `Contains` is the default filter used by `get_by_text`; the other
/// variants are available through `get_filtered` and the widget query
/// builder.
#[derive(Debug, Clone)]
pub enum TextFilter {
    /// Case-sensitive substring match.
    Contains(String),
    /// Whole-text equality.
    Exact(String),
    /// Regular-expression match.
    Matches(Regex),
}

impl TextFilter {
    /// Substring filter (case-sensitive).
    #[must_use]
    pub fn contains(text: impl Into<String>) -> Self {
        Self::Contains(text.into())
    }

    /// Whole-text equality filter.
    #[must_use]
    pub fn exact(text: impl Into<String>) -> Self {
        Self::Exact(text.into())
    }

    /// Regular-expression filter.
    ///
    /// # Errors
    ///
    /// Returns [`TantearError::InvalidFilter`] when the pattern fails to
    /// compile.
    pub fn matches(pattern: &str) -> TantearResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| TantearError::InvalidFilter {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::Matches(regex))
    }

    /// True when the given rendered text satisfies the predicate.
    #[must_use]
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            Self::Contains(needle) => text.contains(needle.as_str()),
            Self::Exact(expected) => text == expected,
            Self::Matches(regex) => regex.is_match(text),
        }
    }
}

impl fmt::Display for TextFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contains(needle) => write!(f, "contains({needle})"),
            Self::Exact(expected) => write!(f, "exact({expected})"),
            Self::Matches(regex) => write!(f, "matches({regex})"),
        }
    }
}
