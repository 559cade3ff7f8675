#![allow(dead_code)]

pub mod assertions;

use std::sync::Arc;

use rightsize::adapter::outbound::solver::HiGHSSolver;
use rightsize::application::Optimizer;
use rightsize::domain::{AllocationRow, OptimizationReport, WorkforcePolicy};

/// Optimizer backed by the real HiGHS solver and an empty policy.
pub fn highs_optimizer() -> Optimizer {
    highs_optimizer_with(WorkforcePolicy::default())
}

/// Optimizer backed by the real HiGHS solver.
pub fn highs_optimizer_with(policy: WorkforcePolicy) -> Optimizer {
    Optimizer::new(Arc::new(HiGHSSolver::new()), policy)
}

/// Find the row for one (function, role) pair or fail the test.
pub fn row<'a>(report: &'a OptimizationReport, function: &str, role: &str) -> &'a AllocationRow {
    report
        .rows
        .iter()
        .find(|row| row.function.as_str() == function && row.role.as_str() == role)
        .unwrap_or_else(|| panic!("no row for {function}|{role}"))
}
