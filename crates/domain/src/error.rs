//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A display surface identifier is empty or malformed.
    #[error("invalid surface identifier: {0:?}")]
    InvalidSurfaceId(String),

    /// A locale tag could not be parsed.
    #[error("invalid locale tag: {0:?}")]
    InvalidLocale(String),

    /// The tick period must be at least one millisecond.
    #[error("invalid tick period: {0} ms")]
    InvalidTickPeriod(u64),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
