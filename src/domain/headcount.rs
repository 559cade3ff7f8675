//! Current headcount matrix keyed by (function, role).

use std::collections::HashMap;
use std::fmt;

use super::error::InputError;
use super::id::{FunctionName, RoleName};

/// Separator used by the external `"<function>|<role>"` key encoding.
pub const KEY_SEPARATOR: char = '|';

/// Composite (function, role) key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeadcountKey {
    function: FunctionName,
    role: RoleName,
}

impl HeadcountKey {
    /// Create a key from its parts.
    pub fn new(function: impl Into<FunctionName>, role: impl Into<RoleName>) -> Self {
        Self {
            function: function.into(),
            role: role.into(),
        }
    }

    /// Parse the `"<function>|<role>"` encoding.
    ///
    /// The key is split on the first separator, so role names may themselves
    /// contain `|`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MalformedHeadcountKey`] when the separator is
    /// missing or either side is empty.
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        match raw.split_once(KEY_SEPARATOR) {
            Some((function, role)) if !function.is_empty() && !role.is_empty() => {
                Ok(Self::new(function, role))
            }
            _ => Err(InputError::MalformedHeadcountKey {
                key: raw.to_string(),
            }),
        }
    }

    #[must_use]
    pub const fn function(&self) -> &FunctionName {
        &self.function
    }

    #[must_use]
    pub const fn role(&self) -> &RoleName {
        &self.role
    }
}

impl fmt::Display for HeadcountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.function, KEY_SEPARATOR, self.role)
    }
}

/// Number of people currently employed per (function, role).
///
/// Unspecified pairs read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadcountMatrix {
    counts: HashMap<HeadcountKey, u32>,
}

impl HeadcountMatrix {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the headcount of one (function, role) pair, replacing any prior value.
    pub fn set(&mut self, key: HeadcountKey, count: u32) {
        self.counts.insert(key, count);
    }

    /// Headcount of a pair, or zero if it was never set.
    #[must_use]
    pub fn get(&self, function: &FunctionName, role: &RoleName) -> u32 {
        self.counts
            .get(&HeadcountKey::new(function.clone(), role.clone()))
            .copied()
            .unwrap_or(0)
    }

    /// Total headcount of a function across the given roles, saturating at
    /// `u32::MAX`.
    #[must_use]
    pub fn function_total(&self, function: &FunctionName, roles: &[RoleName]) -> u32 {
        roles
            .iter()
            .map(|role| self.get(function, role))
            .fold(0, u32::saturating_add)
    }

    /// Number of explicitly set pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_first_separator() {
        let key = HeadcountKey::parse("Ops|Manager").unwrap();
        assert_eq!(key.function().as_str(), "Ops");
        assert_eq!(key.role().as_str(), "Manager");

        let key = HeadcountKey::parse("Ops|Team|Lead").unwrap();
        assert_eq!(key.role().as_str(), "Team|Lead");
    }

    #[test]
    fn parse_rejects_missing_parts() {
        for raw in ["Ops", "|Manager", "Ops|", ""] {
            assert!(
                matches!(
                    HeadcountKey::parse(raw),
                    Err(InputError::MalformedHeadcountKey { .. })
                ),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn key_display_round_trips_encoding() {
        let key = HeadcountKey::new("Finance", "Officer");
        assert_eq!(key.to_string(), "Finance|Officer");
    }

    #[test]
    fn matrix_defaults_to_zero() {
        let mut matrix = HeadcountMatrix::new();
        matrix.set(HeadcountKey::new("Ops", "Manager"), 2);
        matrix.set(HeadcountKey::new("Ops", "Officer"), 3);

        let ops = FunctionName::new("Ops");
        assert_eq!(matrix.get(&ops, &RoleName::new("Manager")), 2);
        assert_eq!(matrix.get(&ops, &RoleName::new("Clerk")), 0);
        assert_eq!(
            matrix.function_total(
                &ops,
                &[RoleName::new("Manager"), RoleName::new("Officer"), RoleName::new("Clerk")]
            ),
            5
        );
    }

    #[test]
    fn function_total_saturates() {
        let mut matrix = HeadcountMatrix::new();
        matrix.set(HeadcountKey::new("Ops", "Manager"), 3_000_000_000);
        matrix.set(HeadcountKey::new("Ops", "Officer"), 3_000_000_000);

        let roles = [RoleName::new("Manager"), RoleName::new("Officer")];
        assert_eq!(
            matrix.function_total(&FunctionName::new("Ops"), &roles),
            u32::MAX
        );
    }
}
