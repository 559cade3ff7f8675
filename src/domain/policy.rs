//! Workforce policy: organisation-wide defaults applied to every request.
//!
//! Requests may omit the role list or the weight maps; the policy fills them.
//! When both supply a weight for the same role, the request wins.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::id::RoleName;
use super::penalty::ShortagePenalty;

/// Default role list, weight maps and shortage-penalty policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkforcePolicy {
    /// Role list used when a request does not declare one.
    pub roles: Vec<RoleName>,
    /// Default minimum role-share weights.
    pub alpha: BTreeMap<RoleName, Decimal>,
    /// Default removal penalty weights.
    pub penalty: BTreeMap<RoleName, Decimal>,
    /// Shortage weight policy.
    pub shortage_penalty: ShortagePenalty,
}

impl WorkforcePolicy {
    /// Overlay request weights on top of the policy defaults.
    #[must_use]
    pub fn merged_alpha(
        &self,
        overrides: Option<&BTreeMap<String, Decimal>>,
    ) -> BTreeMap<RoleName, Decimal> {
        overlay(&self.alpha, overrides)
    }

    /// Overlay request penalties on top of the policy defaults.
    #[must_use]
    pub fn merged_penalty(
        &self,
        overrides: Option<&BTreeMap<String, Decimal>>,
    ) -> BTreeMap<RoleName, Decimal> {
        overlay(&self.penalty, overrides)
    }
}

fn overlay(
    defaults: &BTreeMap<RoleName, Decimal>,
    overrides: Option<&BTreeMap<String, Decimal>>,
) -> BTreeMap<RoleName, Decimal> {
    let mut merged = defaults.clone();
    if let Some(overrides) = overrides {
        for (role, weight) in overrides {
            merged.insert(RoleName::new(role.as_str()), *weight);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn request_weights_override_policy() {
        let policy = WorkforcePolicy {
            penalty: BTreeMap::from([
                (RoleName::new("Manager"), dec!(3)),
                (RoleName::new("Officer"), dec!(1)),
            ]),
            ..WorkforcePolicy::default()
        };
        let overrides = BTreeMap::from([("Manager".to_string(), dec!(5))]);

        let merged = policy.merged_penalty(Some(&overrides));
        assert_eq!(merged[&RoleName::new("Manager")], dec!(5));
        assert_eq!(merged[&RoleName::new("Officer")], dec!(1));
    }

    #[test]
    fn missing_overrides_keep_defaults() {
        let policy = WorkforcePolicy {
            alpha: BTreeMap::from([(RoleName::new("Manager"), dec!(0.2))]),
            ..WorkforcePolicy::default()
        };
        assert_eq!(policy.merged_alpha(None), policy.alpha);
    }
}
