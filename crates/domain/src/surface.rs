//! Display surface identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DomainError, DomainResult};

/// Identifier of the surface the clock writes into when none is configured.
pub const DYNAMIC_CLOCK_ID: &str = "dynamic-clock";

/// Identifier of an addressable display surface.
///
/// Identifiers are non-empty and contain no whitespace, so they can be
/// looked up the same way an element id is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SurfaceId(String);

impl SurfaceId {
    /// Creates a surface identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSurfaceId`] if the identifier is empty
    /// or contains whitespace.
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidSurfaceId(id));
        }
        Ok(Self(id))
    }

    /// The well-known `dynamic-clock` identifier.
    #[must_use]
    pub fn dynamic_clock() -> Self {
        Self(DYNAMIC_CLOCK_ID.to_owned())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SurfaceId {
    fn default() -> Self {
        Self::dynamic_clock()
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SurfaceId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SurfaceId> for String {
    fn from(id: SurfaceId) -> Self {
        id.0
    }
}
