//! Error types for sqlfrag

use thiserror::Error;

/// Result type alias for sqlfrag operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors raised while building or rendering fragments.
///
/// Composition itself is total; these only surface at the edges: building a
/// leaf from a template, validating an identifier, rendering a statement, or
/// encoding a [`Value`](crate::Value) for a concrete Postgres type.
#[derive(Debug, Error)]
pub enum SqlError {
    /// Invalid input (placeholder/parameter mismatch, bad page number, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Identifier rejected by [`Ident::parse`](crate::Ident::parse)
    #[error("Invalid identifier: {0}")]
    InvalidIdent(String),

    /// A bound value cannot be encoded as the requested SQL type
    #[error("Cannot convert {value} to {target}")]
    Conversion { value: String, target: String },
}

impl SqlError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an invalid identifier error
    pub fn invalid_ident(message: impl Into<String>) -> Self {
        Self::InvalidIdent(message.into())
    }

    /// Create a conversion error
    pub fn conversion(value: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Conversion {
            value: value.into(),
            target: target.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an identifier error
    pub fn is_invalid_ident(&self) -> bool {
        matches!(self, Self::InvalidIdent(_))
    }
}
