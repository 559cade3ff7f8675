//! Solver port for mixed-integer linear programming.
//!
//! Defines the trait the optimizer uses to hand a formulated model to an
//! external MILP capability, plus the problem and solution types exchanged
//! across that boundary.
//!
//! # Overview
//!
//! - [`Solver`]: Core MILP solver interface
//! - [`LpProblem`] / [`IlpProblem`]: Problem definitions
//! - [`LpSolution`]: Solution representation
//! - [`SolutionStatus`]: Termination status

use std::fmt;

use rust_decimal::Decimal;

use crate::domain::{Constraint, VariableBounds};
use crate::error::Result;

/// Mixed-integer linear programming solver.
///
/// Implementations wrap specific solver backends (HiGHS, CBC, ...) and provide
/// a unified interface for the staffing model.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`) so a single solver can
/// serve concurrent optimization requests.
///
/// # Implementation Notes
///
/// - Report infeasible or unbounded models through [`SolutionStatus`], not
///   through `Err`; `Err` is reserved for a backend that cannot run at all.
/// - Perform exactly one solve attempt per call.
pub trait Solver: Send + Sync {
    /// Return the solver name for logging and configuration.
    fn name(&self) -> &'static str;

    /// Solve an integer linear programming problem.
    ///
    /// Minimizes the objective function with integer constraints on the
    /// specified variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be invoked.
    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution>;
}

/// Linear programming problem definition.
///
/// Represents a minimization problem of the form:
///
/// ```text
/// minimize    c^T * x
/// subject to  constraints
///             bounds on x
/// ```
#[derive(Debug, Clone)]
pub struct LpProblem {
    /// Objective function coefficients.
    ///
    /// The solver minimizes `c^T * x` where `c` is this vector.
    pub objective: Vec<Decimal>,

    /// Linear constraints on the variables.
    pub constraints: Vec<Constraint>,

    /// Lower and upper bounds for each variable.
    pub bounds: Vec<VariableBounds>,
}

impl LpProblem {
    /// Create a new LP problem with the specified number of variables.
    ///
    /// Initializes all objective coefficients to zero and all variable bounds
    /// to their defaults.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            objective: vec![Decimal::ZERO; num_vars],
            constraints: Vec::new(),
            bounds: vec![VariableBounds::default(); num_vars],
        }
    }

    /// Return the number of decision variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    /// Evaluate `c^T * x`, saturating at the `Decimal` range.
    #[must_use]
    pub fn objective_value(&self, values: &[Decimal]) -> Decimal {
        self.objective
            .iter()
            .zip(values.iter())
            .map(|(c, x)| c.saturating_mul(*x))
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

/// Integer linear programming problem definition.
///
/// Extends a linear programming problem with integer constraints on specified
/// variables.
#[derive(Debug, Clone)]
pub struct IlpProblem {
    /// Underlying linear programming problem.
    pub lp: LpProblem,

    /// Indices of variables constrained to integer values.
    ///
    /// Variables not in this list are continuous.
    pub integer_vars: Vec<usize>,
}

impl IlpProblem {
    /// Create an ILP problem from an LP with specified integer variables.
    #[must_use]
    pub const fn new(lp: LpProblem, integer_vars: Vec<usize>) -> Self {
        Self { lp, integer_vars }
    }
}

/// Solution to a linear or integer programming problem.
#[derive(Debug, Clone)]
pub struct LpSolution {
    /// Values for each decision variable.
    pub values: Vec<Decimal>,

    /// Objective function value (without any caller-side constant offset).
    pub objective: Decimal,

    /// Termination status of the solver.
    pub status: SolutionStatus,
}

impl LpSolution {
    /// Build a failed solution carrying no usable values.
    #[must_use]
    pub fn failed(num_vars: usize, status: SolutionStatus) -> Self {
        Self {
            values: vec![Decimal::ZERO; num_vars],
            objective: Decimal::ZERO,
            status,
        }
    }

    /// Return `true` if the solver found an optimal solution.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

/// Termination status of an optimization solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Solver found a globally optimal solution.
    Optimal,

    /// Solver found a valid, possibly suboptimal, solution within its limits.
    Feasible,

    /// No feasible solution exists.
    Infeasible,

    /// Objective function is unbounded.
    Unbounded,

    /// Solver encountered an internal error or ran out of resources without
    /// an incumbent.
    Error,
}

impl SolutionStatus {
    /// True for the statuses whose values may be returned to the caller.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Optimal | Self::Feasible)
    }
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Optimal => "optimal",
            Self::Feasible => "feasible",
            Self::Infeasible => "infeasible",
            Self::Unbounded => "unbounded",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}
