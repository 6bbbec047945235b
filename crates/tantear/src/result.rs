//! Result and error types for Tantear.

use thiserror::Error;

/// Result type for Tantear operations
pub type TantearResult<T> = Result<T, TantearError>;

/// Errors that can occur in Tantear
#[derive(Debug, Error)]
pub enum TantearError {
    /// Scalar read (`text`, `value`, `enabled`, `attribute`) on an empty scope
    #[error("Cannot read `{property}` from empty scope `{scope}`")]
    EmptyScope {
        /// Property that was being read
        property: String,
        /// Description of the scope that resolved to zero nodes
        scope: String,
    },

    /// Required widget lookup found no match
    #[error("No `{widget}` found matching `{selector}`")]
    NotFound {
        /// Widget type name
        widget: String,
        /// Selector that failed to resolve
        selector: String,
    },

    /// Selector text failed to parse
    #[error("Invalid selector `{input}` at byte {position}: {reason}")]
    InvalidSelector {
        /// Raw selector input
        input: String,
        /// Byte offset of the failure
        position: usize,
        /// Parse failure description
        reason: String,
    },

    /// Text filter pattern failed to compile
    #[error("Invalid text filter `{pattern}`: {reason}")]
    InvalidFilter {
        /// Pattern that failed to compile
        pattern: String,
        /// Compile failure description
        reason: String,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TantearError {
    /// Build an `EmptyScope` error for a scalar read.
    pub fn empty_scope(property: &str, scope: impl Into<String>) -> Self {
        Self::EmptyScope {
            property: property.to_string(),
            scope: scope.into(),
        }
    }

    /// Build a `NotFound` error for a required widget lookup.
    pub fn not_found(widget: &str, selector: impl Into<String>) -> Self {
        Self::NotFound {
            widget: widget.to_string(),
            selector: selector.into(),
        }
    }
}
