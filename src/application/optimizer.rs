//! Optimization service.
//!
//! Wires the pipeline for a single request:
//! builder → formulation → solver → projection.
//! The service owns no per-request state; every call builds an isolated
//! model, so one instance can be shared across threads.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, info_span, warn};
use uuid::Uuid;

use super::builder::ModelInputBuilder;
use super::formulation::formulate;
use super::projection::project;
use crate::domain::{OptimizationReport, WorkforcePolicy};
use crate::error::{Result, SolveError};
use crate::port::inbound::optimize::{OptimizeRequest, OptimizePort};
use crate::port::outbound::solver::Solver;

/// Minimal-disruption headcount optimizer.
pub struct Optimizer {
    solver: Arc<dyn Solver>,
    builder: ModelInputBuilder,
}

impl Optimizer {
    /// Create an optimizer that solves with `solver` under `policy`.
    pub fn new(solver: Arc<dyn Solver>, policy: WorkforcePolicy) -> Self {
        Self {
            solver,
            builder: ModelInputBuilder::new(policy),
        }
    }

    /// Name of the underlying solver backend.
    #[must_use]
    pub fn solver_name(&self) -> &'static str {
        self.solver.name()
    }

    #[must_use]
    pub const fn policy(&self) -> &WorkforcePolicy {
        self.builder.policy()
    }
}

impl OptimizePort for Optimizer {
    fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizationReport> {
        let run_id = Uuid::new_v4();
        let span = info_span!("optimize", run_id = %run_id, solver = self.solver.name());
        let _guard = span.enter();

        let input = self.builder.build(request).map_err(|e| {
            warn!(error = %e, "Rejected optimization request");
            e
        })?;

        let formulation = formulate(&input, &self.policy().shortage_penalty);

        let started = Instant::now();
        let solution = self.solver.solve_ilp(&formulation.problem)?;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        if !solution.status.is_success() {
            warn!(status = %solution.status, elapsed_ms, "Solve failed");
            return Err(SolveError::Failed {
                status: solution.status,
            }
            .into());
        }

        let report = project(&input, &formulation, &solution);
        info!(
            status = %solution.status,
            elapsed_ms,
            objective = %report.objective,
            removed = report.total_removed(),
            shortage = %report.total_shortage(),
            "Optimization complete"
        );
        Ok(report)
    }
}
