//! Canonical model input: the (F, R, W, C, N, alpha, penalty) tuple.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::headcount::HeadcountMatrix;
use super::id::{FunctionName, RoleName};

/// Validated optimization input with every default filled.
///
/// Built by the model input builder; constructing one directly skips
/// validation and is intended for tests and trusted callers.
#[derive(Debug, Clone)]
pub struct ModelInput {
    /// Declared functions, in report order.
    pub functions: Vec<FunctionName>,
    /// Declared roles, in report order.
    pub roles: Vec<RoleName>,
    /// Required productive hours per function.
    pub workload: HashMap<FunctionName, Decimal>,
    /// Productive hours contributed by one person.
    pub capacity: Decimal,
    /// Current headcount per (function, role).
    pub headcount: HeadcountMatrix,
    /// Minimum role-share weight per role (zero = unconstrained).
    pub alpha: HashMap<RoleName, Decimal>,
    /// Removal penalty weight per role.
    pub penalty: HashMap<RoleName, Decimal>,
}

/// Penalty applied to roles without an explicit weight.
pub const DEFAULT_REMOVAL_PENALTY: Decimal = Decimal::ONE;

impl ModelInput {
    /// Required hours for a function; zero if absent.
    #[must_use]
    pub fn workload(&self, function: &FunctionName) -> Decimal {
        self.workload.get(function).copied().unwrap_or(Decimal::ZERO)
    }

    #[must_use]
    pub fn alpha(&self, role: &RoleName) -> Decimal {
        self.alpha.get(role).copied().unwrap_or(Decimal::ZERO)
    }

    #[must_use]
    pub fn penalty(&self, role: &RoleName) -> Decimal {
        self.penalty
            .get(role)
            .copied()
            .unwrap_or(DEFAULT_REMOVAL_PENALTY)
    }

    #[must_use]
    pub fn current(&self, function: &FunctionName, role: &RoleName) -> u32 {
        self.headcount.get(function, role)
    }

    /// Cost of removing everyone: `Σ_{f,r} penalty[r] * N[f,r]`.
    ///
    /// Upper bound on the removal term of the objective. Saturates at
    /// `Decimal::MAX`; built inputs never reach it.
    #[must_use]
    pub fn max_removal_cost(&self) -> Decimal {
        self.functions
            .iter()
            .flat_map(|function| {
                self.roles.iter().map(move |role| {
                    self.penalty(role)
                        .saturating_mul(Decimal::from(self.current(function, role)))
                })
            })
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Number of (function, role) pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.functions.len() * self.roles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::headcount::HeadcountKey;
    use rust_decimal_macros::dec;

    fn ops_input() -> ModelInput {
        let mut headcount = HeadcountMatrix::new();
        headcount.set(HeadcountKey::new("Ops", "Manager"), 2);
        headcount.set(HeadcountKey::new("Ops", "Officer"), 3);
        ModelInput {
            functions: vec![FunctionName::new("Ops")],
            roles: vec![RoleName::new("Manager"), RoleName::new("Officer")],
            workload: HashMap::from([(FunctionName::new("Ops"), dec!(20))]),
            capacity: dec!(6.5),
            headcount,
            alpha: HashMap::new(),
            penalty: HashMap::from([(RoleName::new("Manager"), dec!(3))]),
        }
    }

    #[test]
    fn accessors_fill_defaults() {
        let input = ops_input();
        assert_eq!(input.alpha(&RoleName::new("Manager")), Decimal::ZERO);
        assert_eq!(input.penalty(&RoleName::new("Officer")), DEFAULT_REMOVAL_PENALTY);
        assert_eq!(input.workload(&FunctionName::new("Missing")), Decimal::ZERO);
    }

    #[test]
    fn max_removal_cost_weights_each_pair() {
        // 3 * 2 managers + 1 * 3 officers
        assert_eq!(ops_input().max_removal_cost(), dec!(9));
    }

    #[test]
    fn max_removal_cost_saturates_on_unchecked_input() {
        let mut input = ops_input();
        input
            .penalty
            .insert(RoleName::new("Manager"), dec!(100000000000000000000));
        input
            .headcount
            .set(HeadcountKey::new("Ops", "Manager"), 1_000_000_000);
        assert_eq!(input.max_removal_cost(), Decimal::MAX);
    }
}
