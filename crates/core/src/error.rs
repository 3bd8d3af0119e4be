//! Domain error model.

use thiserror::Error;

use crate::id::ArticleId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: the inventory is left exactly as it was
/// before the failing call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A price or stock value violated its constraint.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An article with the same name is already registered.
    #[error("article '{0}' is already registered in the inventory")]
    DuplicateName(String),

    /// No article is stored under the identifier.
    #[error("no article found with ID {0}")]
    NotFound(ArticleId),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    pub fn not_found(id: ArticleId) -> Self {
        Self::NotFound(id)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// The bare reason of a validation failure, without the "validation failed" prefix.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Validation(reason) => Some(reason),
            _ => None,
        }
    }
}
