//! Workforce policy configuration.
//!
//! The `[policy]` table supplies defaults for requests that omit the role list
//! or the weight maps, and picks the shortage-penalty mode:
//!
//! ```toml
//! [policy]
//! roles = ["Manager", "Officer"]
//! alpha = { Manager = 0.2 }
//! penalty = { Manager = 3, Officer = 1 }
//! shortage_penalty = { mode = "adaptive", multiplier = 10 }
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{RoleName, ShortagePenalty, WorkforcePolicy};
use crate::error::{ConfigError, Result};

/// Raw `[policy]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub roles: Vec<String>,
    pub alpha: BTreeMap<String, Decimal>,
    pub penalty: BTreeMap<String, Decimal>,
    pub shortage_penalty: ShortagePenalty,
}

impl PolicyConfig {
    /// Check weight ranges and the shortage-penalty parameters.
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some((role, share)) = self
            .alpha
            .iter()
            .find(|(_, share)| **share < Decimal::ZERO || **share >= Decimal::ONE)
        {
            return Err(ConfigError::InvalidValue {
                field: "policy.alpha",
                reason: format!("share for role '{role}' must be in [0, 1), got {share}"),
            }
            .into());
        }
        if let Some((role, weight)) = self.penalty.iter().find(|(_, w)| **w <= Decimal::ZERO) {
            return Err(ConfigError::InvalidValue {
                field: "policy.penalty",
                reason: format!("weight for role '{role}' must be greater than 0, got {weight}"),
            }
            .into());
        }
        match self.shortage_penalty {
            ShortagePenalty::Fixed { value } if value <= Decimal::ZERO => {
                Err(ConfigError::InvalidValue {
                    field: "policy.shortage_penalty.value",
                    reason: "must be greater than 0".to_string(),
                }
                .into())
            }
            ShortagePenalty::Adaptive { multiplier } if multiplier < Decimal::ONE => {
                Err(ConfigError::InvalidValue {
                    field: "policy.shortage_penalty.multiplier",
                    reason: "must be >= 1".to_string(),
                }
                .into())
            }
            _ => Ok(()),
        }
    }

    /// Convert into the domain policy.
    #[must_use]
    pub fn to_policy(&self) -> WorkforcePolicy {
        WorkforcePolicy {
            roles: self.roles.iter().map(|r| RoleName::new(r.as_str())).collect(),
            alpha: convert_weights(&self.alpha),
            penalty: convert_weights(&self.penalty),
            shortage_penalty: self.shortage_penalty,
        }
    }
}

fn convert_weights(weights: &BTreeMap<String, Decimal>) -> BTreeMap<RoleName, Decimal> {
    weights
        .iter()
        .map(|(role, weight)| (RoleName::new(role.as_str()), *weight))
        .collect()
}
