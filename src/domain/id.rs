//! Organizational identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Organizational function identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FunctionName(String);

impl FunctionName {
    /// Create a new `FunctionName` from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the function name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FunctionName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for FunctionName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Job grade identifier (e.g. "Manager", "Officer").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleName(String);

impl RoleName {
    /// Create a new `RoleName` from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the role name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RoleName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for RoleName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
