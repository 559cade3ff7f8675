//! Solver factory.
//!
//! Builds the MILP backend named by the `[solver]` configuration section.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::outbound::solver::HiGHSSolver;
use crate::error::{Result, SolveError};
use crate::infrastructure::config::solver::{SolverConfig, HIGHS_BACKEND};
use crate::port::outbound::solver::Solver;

/// Build the configured solver backend.
///
/// # Errors
///
/// Returns [`SolveError::Unavailable`] when the backend is not linked into
/// this build.
pub fn build_solver(config: &SolverConfig) -> Result<Arc<dyn Solver>> {
    match config.backend.as_str() {
        HIGHS_BACKEND => {
            let mut solver = HiGHSSolver::new().with_verbose(config.verbose);
            if let Some(limit) = config.time_limit_secs {
                solver = solver.with_time_limit(limit);
            }
            debug!(
                backend = HIGHS_BACKEND,
                time_limit_secs = ?config.time_limit_secs,
                "Built solver"
            );
            Ok(Arc::new(solver))
        }
        other => Err(SolveError::Unavailable {
            backend: other.to_string(),
            reason: format!("unknown solver backend (available: {HIGHS_BACKEND})"),
        }
        .into()),
    }
}
