//! Mock solvers for exercising the optimizer without a MILP backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rust_decimal::Decimal;

use crate::error::{Result, SolveError};
use crate::port::outbound::solver::{IlpProblem, LpSolution, SolutionStatus, Solver};

/// Solver that returns a scripted status and values.
///
/// Without explicit values, every variable is set to its upper bound (or its
/// lower bound when unbounded above), which keeps all current staff and
/// leaves shortage at zero.
pub struct ScriptedSolver {
    status: SolutionStatus,
    values: Option<Vec<Decimal>>,
    calls: AtomicUsize,
    last_problem: Mutex<Option<IlpProblem>>,
}

impl ScriptedSolver {
    /// Create a solver that always terminates with `status`.
    #[must_use]
    pub fn returning(status: SolutionStatus) -> Self {
        Self {
            status,
            values: None,
            calls: AtomicUsize::new(0),
            last_problem: Mutex::new(None),
        }
    }

    /// Return these values instead of the bound-derived default.
    #[must_use]
    pub fn with_values(mut self, values: Vec<Decimal>) -> Self {
        self.values = Some(values);
        self
    }

    /// Number of solve calls received.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Copy of the most recently received problem.
    #[must_use]
    pub fn last_problem(&self) -> Option<IlpProblem> {
        match self.last_problem.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Solver for ScriptedSolver {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.last_problem.lock() {
            Ok(mut guard) => *guard = Some(problem.clone()),
            Err(poisoned) => *poisoned.into_inner() = Some(problem.clone()),
        }

        if !self.status.is_success() {
            return Ok(LpSolution::failed(problem.lp.num_vars(), self.status));
        }

        let values = self.values.clone().unwrap_or_else(|| {
            problem
                .lp
                .bounds
                .iter()
                .map(|b| b.upper.or(b.lower).unwrap_or(Decimal::ZERO))
                .collect()
        });
        Ok(LpSolution {
            objective: problem.lp.objective_value(&values),
            values,
            status: self.status,
        })
    }
}

/// Solver whose backend can never be reached.
pub struct UnavailableSolver;

impl Solver for UnavailableSolver {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn solve_ilp(&self, _problem: &IlpProblem) -> Result<LpSolution> {
        Err(SolveError::Unavailable {
            backend: self.name().to_string(),
            reason: "backend not linked".to_string(),
        }
        .into())
    }
}
