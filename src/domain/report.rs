//! Redeployment report produced from a solved model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{FunctionName, RoleName};

/// Recommendation for one (function, role) pair.
///
/// Serialized with the column names of the external contract
/// (`Function`, `Role`, `Current`, ...); hour values are emitted as numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AllocationRow {
    pub function: FunctionName,
    pub role: RoleName,
    /// Current headcount `N[f,r]`.
    pub current: u32,
    /// Recommended headcount `x[f,r]`.
    pub optimal: u32,
    /// `current - optimal`.
    pub removed: u32,
    /// Required hours of the function, 2 decimals.
    #[serde(with = "rust_decimal::serde::float")]
    pub workload: Decimal,
    /// Hours covered by the function's optimal headcount, 2 decimals.
    #[serde(with = "rust_decimal::serde::float")]
    pub capacity: Decimal,
    /// Uncovered hours of the function, 2 decimals.
    #[serde(with = "rust_decimal::serde::float")]
    pub shortage: Decimal,
}

/// Per-function totals across roles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionSummary {
    pub function: FunctionName,
    pub current: u32,
    pub optimal: u32,
    pub removed: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub workload: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub capacity: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub shortage: Decimal,
}

impl FunctionSummary {
    /// True when the function's workload is fully covered.
    #[must_use]
    pub fn is_covered(&self) -> bool {
        self.shortage.is_zero()
    }
}

/// Full result of one optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationReport {
    /// Rows grouped by function, then role, in declaration order.
    pub rows: Vec<AllocationRow>,
    /// One summary per function, in declaration order.
    pub summaries: Vec<FunctionSummary>,
    /// Objective value including the constant removal offset.
    pub objective: Decimal,
    /// Shortage weight used for this run.
    pub big_m: Decimal,
    /// Whether the solver proved optimality.
    pub proven_optimal: bool,
}

impl OptimizationReport {
    /// Total people marked for redeployment.
    #[must_use]
    pub fn total_removed(&self) -> u32 {
        self.summaries
            .iter()
            .map(|summary| summary.removed)
            .fold(0, u32::saturating_add)
    }

    /// Total uncovered hours across functions.
    #[must_use]
    pub fn total_shortage(&self) -> Decimal {
        self.summaries
            .iter()
            .map(|summary| summary.shortage)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Rows belonging to one function.
    pub fn rows_for<'a>(
        &'a self,
        function: &'a FunctionName,
    ) -> impl Iterator<Item = &'a AllocationRow> + 'a {
        self.rows.iter().filter(move |row| &row.function == function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn row_serializes_with_contract_columns() {
        let row = AllocationRow {
            function: FunctionName::new("Ops"),
            role: RoleName::new("Officer"),
            current: 3,
            optimal: 2,
            removed: 1,
            workload: dec!(20.00),
            capacity: dec!(26.00),
            shortage: dec!(0.00),
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["Function"], "Ops");
        assert_eq!(value["Role"], "Officer");
        assert_eq!(value["Removed"], 1);
        assert_eq!(value["Workload"], 20.0);
        assert_eq!(value["Shortage"], 0.0);
    }
}
