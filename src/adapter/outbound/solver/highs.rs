//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming solver.
//! This implementation wraps it using the good_lp crate for ergonomic Rust usage.

use std::collections::HashSet;
use std::time::Instant;

use good_lp::solvers::highs::highs;
use good_lp::solvers::SolutionStatus as HighsStatus;
use good_lp::{
    constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel, Variable,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::ConstraintSense;
use crate::error::Result;
use crate::port::outbound::solver::{IlpProblem, LpSolution, SolutionStatus, Solver};

/// HiGHS-based MILP solver.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver {
    time_limit_secs: Option<f64>,
    verbose: bool,
}

impl HiGHSSolver {
    /// Create a new HiGHS solver instance with no time limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the search after `secs` seconds, keeping the best incumbent.
    #[must_use]
    pub fn with_time_limit(mut self, secs: f64) -> Self {
        self.time_limit_secs = Some(secs);
        self
    }

    /// Let HiGHS print its own progress log.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        let n = problem.lp.num_vars();

        // Handle empty problem
        if n == 0 {
            return Ok(LpSolution {
                values: vec![],
                objective: Decimal::ZERO,
                status: SolutionStatus::Optimal,
            });
        }

        let integer_vars: HashSet<usize> = problem.integer_vars.iter().copied().collect();

        // Create variables
        let mut vars = variables!();
        let mut var_list = Vec::with_capacity(n);

        for (i, bounds) in problem.lp.bounds.iter().enumerate() {
            let mut v = variable();

            if let Some(lb) = bounds.lower {
                v = v.min(to_f64(lb));
            }
            if let Some(ub) = bounds.upper {
                v = v.max(ub.to_f64().unwrap_or(f64::INFINITY));
            }
            if integer_vars.contains(&i) {
                v = v.integer();
            }

            var_list.push(vars.add(v));
        }

        let objective: Expression = var_list
            .iter()
            .zip(problem.lp.objective.iter())
            .map(|(v, c)| to_f64(*c) * *v)
            .sum();

        let mut model = vars.minimise(&objective).using(highs);
        model.set_verbose(self.verbose);
        if let Some(limit) = self.time_limit_secs {
            model = model.set_time_limit(limit);
        }

        for constr in &problem.lp.constraints {
            let lhs = linear_expression(&var_list, &constr.terms);
            let rhs = to_f64(constr.rhs);

            model = match constr.sense {
                ConstraintSense::GreaterEqual => model.with(constraint!(lhs >= rhs)),
                ConstraintSense::LessEqual => model.with(constraint!(lhs <= rhs)),
                ConstraintSense::Equal => model.with(constraint!(lhs == rhs)),
            };
        }

        let started = Instant::now();
        let outcome = model.solve();
        let elapsed = started.elapsed().as_secs_f64();

        match outcome {
            Ok(solution) => {
                let raw: Vec<f64> = var_list.iter().map(|v| solution.value(*v)).collect();
                let values = match decode_values(&raw) {
                    Ok(values) => values,
                    Err(index) => {
                        warn!(
                            variable = index,
                            value = raw[index],
                            "HiGHS returned a non-finite value"
                        );
                        return Ok(LpSolution::failed(n, SolutionStatus::Error));
                    }
                };

                // Re-evaluate objective with the solved values
                let objective = problem.lp.objective_value(&values);
                let status = map_status(solution.status());
                debug!(%status, elapsed_secs = elapsed, "HiGHS solve finished");

                Ok(LpSolution {
                    values,
                    objective,
                    status,
                })
            }
            Err(err) => {
                let status = match err {
                    ResolutionError::Infeasible => SolutionStatus::Infeasible,
                    ResolutionError::Unbounded => SolutionStatus::Unbounded,
                    other => {
                        warn!(error = %other, "HiGHS reported an error");
                        SolutionStatus::Error
                    }
                };
                Ok(LpSolution::failed(n, status))
            }
        }
    }
}

/// Time, iteration and gap limits all stop with an unproven incumbent.
fn map_status(status: HighsStatus) -> SolutionStatus {
    match status {
        HighsStatus::Optimal => SolutionStatus::Optimal,
        HighsStatus::TimeLimit | HighsStatus::GapLimit => SolutionStatus::Feasible,
    }
}

/// Convert raw solver values, failing with the index of the first
/// non-finite one.
fn decode_values(raw: &[f64]) -> std::result::Result<Vec<Decimal>, usize> {
    raw.iter()
        .enumerate()
        .map(|(index, value)| Decimal::try_from(*value).map_err(|_| index))
        .collect()
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn linear_expression(vars: &[Variable], terms: &[(usize, Decimal)]) -> Expression {
    terms
        .iter()
        .filter_map(|(index, coeff)| vars.get(*index).map(|v| to_f64(*coeff) * *v))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Constraint, VariableBounds};
    use crate::port::outbound::solver::LpProblem;
    use rust_decimal_macros::dec;

    fn assert_close(actual: Decimal, expected: Decimal, what: &str) {
        assert!(
            (actual - expected).abs() < dec!(0.01),
            "{what} should be {expected}, got {actual}"
        );
    }

    #[test]
    fn test_solver_name() {
        let solver = HiGHSSolver::new();
        assert_eq!(solver.name(), "highs");
    }

    #[test]
    fn test_integer_rounding_up() {
        // Minimize: x
        // Subject to: 6.5 x >= 20, x integer
        let solver = HiGHSSolver::new();

        let problem = IlpProblem::new(
            LpProblem {
                objective: vec![Decimal::ONE],
                constraints: vec![Constraint::geq("cover", vec![(0, dec!(6.5))], dec!(20))],
                bounds: vec![VariableBounds::bounded(Decimal::ZERO, dec!(10))],
            },
            vec![0],
        );

        let solution = solver.solve_ilp(&problem).unwrap();

        assert!(solution.is_optimal());
        assert_close(solution.values[0], dec!(4), "x");
    }

    #[test]
    fn test_ceiling_leaves_shortage_in_slack() {
        // One function, three people, 26 hours at 6.5 each.
        // Minimize: -x + 10000 short
        // Subject to: 6.5 x + short >= 26, 0 <= x <= 3 integer, short >= 0
        let solver = HiGHSSolver::new();

        let problem = IlpProblem::new(
            LpProblem {
                objective: vec![-Decimal::ONE, dec!(10000)],
                constraints: vec![Constraint::geq(
                    "coverage[Ops]",
                    vec![(0, dec!(6.5)), (1, Decimal::ONE)],
                    dec!(26),
                )],
                bounds: vec![
                    VariableBounds::bounded(Decimal::ZERO, dec!(3)),
                    VariableBounds::non_negative(),
                ],
            },
            vec![0],
        );

        let solution = solver.solve_ilp(&problem).unwrap();

        assert!(solution.is_optimal());
        assert_close(solution.values[0], dec!(3), "kept staff");
        assert_close(solution.values[1], dec!(6.5), "shortage");
        assert_close(solution.objective, dec!(64997), "objective");
    }

    #[test]
    fn test_role_share_limits_cheaper_role() {
        // Managers (ceiling 2, penalty 3) must be at least half the function.
        // Minimize: -3 m - o + 10000 short
        // Subject to: 6.5 (m + o) + short >= 13, 0.5 m - 0.5 o >= 0
        let solver = HiGHSSolver::new();

        let problem = IlpProblem::new(
            LpProblem {
                objective: vec![dec!(-3), -Decimal::ONE, dec!(10000)],
                constraints: vec![
                    Constraint::geq(
                        "coverage[Ops]",
                        vec![(0, dec!(6.5)), (1, dec!(6.5)), (2, Decimal::ONE)],
                        dec!(13),
                    ),
                    Constraint::geq(
                        "share[Ops,Manager]",
                        vec![(0, dec!(0.5)), (1, dec!(-0.5))],
                        Decimal::ZERO,
                    ),
                ],
                bounds: vec![
                    VariableBounds::bounded(Decimal::ZERO, dec!(2)),
                    VariableBounds::bounded(Decimal::ZERO, dec!(5)),
                    VariableBounds::non_negative(),
                ],
            },
            vec![0, 1],
        );

        let solution = solver.solve_ilp(&problem).unwrap();

        assert!(solution.is_optimal());
        assert_close(solution.values[0], dec!(2), "managers");
        assert_close(solution.values[1], dec!(2), "officers");
        assert_close(solution.values[2], Decimal::ZERO, "shortage");
    }

    #[test]
    fn test_infeasible_problem() {
        // x <= 1 and x >= 2
        let solver = HiGHSSolver::new();

        let problem = IlpProblem::new(
            LpProblem {
                objective: vec![Decimal::ONE],
                constraints: vec![
                    Constraint::leq("low", vec![(0, Decimal::ONE)], Decimal::ONE),
                    Constraint::geq("high", vec![(0, Decimal::ONE)], dec!(2)),
                ],
                bounds: vec![VariableBounds::non_negative()],
            },
            vec![0],
        );

        let solution = solver.solve_ilp(&problem).unwrap();
        assert_eq!(solution.status, SolutionStatus::Infeasible);
        assert!(!solution.status.is_success());
    }

    #[test]
    fn test_empty_problem() {
        let solver = HiGHSSolver::new();
        let problem = IlpProblem::new(LpProblem::new(0), vec![]);
        let solution = solver.solve_ilp(&problem).unwrap();

        assert!(solution.is_optimal());
        assert!(solution.values.is_empty());
    }

    #[test]
    fn test_stopped_searches_are_feasible_not_optimal() {
        assert_eq!(map_status(HighsStatus::Optimal), SolutionStatus::Optimal);
        assert_eq!(map_status(HighsStatus::TimeLimit), SolutionStatus::Feasible);
        assert_eq!(map_status(HighsStatus::GapLimit), SolutionStatus::Feasible);
        assert!(map_status(HighsStatus::GapLimit).is_success());
    }

    #[test]
    fn test_decode_values_rejects_non_finite() {
        assert_eq!(
            decode_values(&[2.0, 6.5]).unwrap(),
            vec![dec!(2), dec!(6.5)]
        );
        assert_eq!(decode_values(&[1.0, f64::NAN]), Err(1));
        assert_eq!(decode_values(&[f64::INFINITY]), Err(0));
    }
}
