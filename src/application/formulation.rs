//! Constraint and objective formulation for the redeployment model.
//!
//! Variables are laid out as all staffing variables `x[f,r]` (function-major,
//! role-minor) followed by one shortage slack `short[f]` per function:
//!
//! ```text
//! index:  0 .. |F|*|R|          |F|*|R| .. |F|*|R| + |F|
//!         x[f0,r0] x[f0,r1] ...  short[f0] short[f1] ...
//! ```
//!
//! Constraints:
//!
//! 1. workload coverage  `C * Σ_r x[f,r] + short[f] >= W[f]`
//! 2. headcount ceiling  `x[f,r] <= N[f,r]`
//! 3. role share         `x[f,r] - alpha[r] * Σ_r' x[f,r'] >= 0`, only when `alpha[r] > 0`
//!
//! Objective: `Σ penalty[r] * (N[f,r] - x[f,r]) + BIG_M * Σ short[f]`. The
//! constant `Σ penalty[r] * N[f,r]` is kept as [`Formulation::objective_offset`].

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::{Constraint, ModelInput, ShortagePenalty, VariableBounds};
use crate::port::outbound::solver::{IlpProblem, LpProblem};

/// Index arithmetic for the variable vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableLayout {
    functions: usize,
    roles: usize,
}

impl VariableLayout {
    #[must_use]
    pub const fn new(functions: usize, roles: usize) -> Self {
        Self { functions, roles }
    }

    /// Index of `x[f,r]`.
    #[must_use]
    pub const fn staff(&self, function: usize, role: usize) -> usize {
        function * self.roles + role
    }

    /// Index of `short[f]`.
    #[must_use]
    pub const fn shortage(&self, function: usize) -> usize {
        self.functions * self.roles + function
    }

    /// Number of staffing variables.
    #[must_use]
    pub const fn staff_count(&self) -> usize {
        self.functions * self.roles
    }

    /// Total number of variables.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.functions * self.roles + self.functions
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Formulated model ready for a solver.
#[derive(Debug, Clone)]
pub struct Formulation {
    /// Solver-neutral problem.
    pub problem: IlpProblem,
    /// Variable index layout.
    pub layout: VariableLayout,
    /// Constant term of the objective (`Σ penalty[r] * N[f,r]`).
    pub objective_offset: Decimal,
    /// Shortage weight applied to each uncovered hour.
    pub big_m: Decimal,
}

impl Formulation {
    /// Full objective value at a point, including the constant offset.
    #[must_use]
    pub fn objective_at(&self, values: &[Decimal]) -> Decimal {
        self.objective_offset
            .saturating_add(self.problem.lp.objective_value(values))
    }

    /// Number of role-share rows emitted.
    #[must_use]
    pub fn role_share_rows(&self) -> usize {
        self.problem
            .lp
            .constraints
            .iter()
            .filter(|row| row.name.starts_with("role_share["))
            .count()
    }
}

/// Build the MILP for a validated input.
#[must_use]
pub fn formulate(input: &ModelInput, shortage_penalty: &ShortagePenalty) -> Formulation {
    let layout = VariableLayout::new(input.functions.len(), input.roles.len());
    let mut lp = LpProblem::new(layout.len());

    let max_removal_cost = input.max_removal_cost();
    let big_m = shortage_penalty.resolve(max_removal_cost);
    if !shortage_penalty.dominates(max_removal_cost) {
        warn!(
            mode = shortage_penalty.mode(),
            big_m = %big_m,
            max_removal_cost = %max_removal_cost,
            "Shortage penalty does not dominate removal cost; shortage may be traded for removals"
        );
    }

    for (fi, function) in input.functions.iter().enumerate() {
        for (ri, role) in input.roles.iter().enumerate() {
            let index = layout.staff(fi, ri);
            let ceiling = Decimal::from(input.current(function, role));
            lp.bounds[index] = VariableBounds::bounded(Decimal::ZERO, ceiling);
            lp.objective[index] = -input.penalty(role);
        }
        let slack = layout.shortage(fi);
        lp.bounds[slack] = VariableBounds::non_negative();
        lp.objective[slack] = big_m;
    }

    for (fi, function) in input.functions.iter().enumerate() {
        let mut cover: Vec<(usize, Decimal)> = (0..input.roles.len())
            .map(|ri| (layout.staff(fi, ri), input.capacity))
            .collect();
        cover.push((layout.shortage(fi), Decimal::ONE));
        lp.constraints.push(Constraint::geq(
            format!("workload_cover[{function}]"),
            cover,
            input.workload(function),
        ));
    }

    for (fi, function) in input.functions.iter().enumerate() {
        for (ri, role) in input.roles.iter().enumerate() {
            lp.constraints.push(Constraint::leq(
                format!("upper_bound[{function},{role}]"),
                vec![(layout.staff(fi, ri), Decimal::ONE)],
                Decimal::from(input.current(function, role)),
            ));
        }
    }

    for (fi, function) in input.functions.iter().enumerate() {
        for (ri, role) in input.roles.iter().enumerate() {
            let alpha = input.alpha(role);
            if alpha <= Decimal::ZERO {
                continue;
            }
            let terms = (0..input.roles.len())
                .map(|other| {
                    let coeff = if other == ri { Decimal::ONE - alpha } else { -alpha };
                    (layout.staff(fi, other), coeff)
                })
                .collect();
            lp.constraints.push(Constraint::geq(
                format!("role_share[{function},{role}]"),
                terms,
                Decimal::ZERO,
            ));
        }
    }

    let integer_vars = (0..layout.staff_count()).collect();
    let formulation = Formulation {
        problem: IlpProblem::new(lp, integer_vars),
        layout,
        objective_offset: max_removal_cost,
        big_m,
    };

    debug!(
        variables = layout.len(),
        constraints = formulation.problem.lp.constraints.len(),
        role_share_rows = formulation.role_share_rows(),
        big_m = %big_m,
        "Model formulated"
    );

    formulation
}
