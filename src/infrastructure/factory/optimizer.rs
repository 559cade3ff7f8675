//! Optimizer factory.

use super::solver::build_solver;
use crate::application::Optimizer;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Wire an [`Optimizer`] from the full configuration.
///
/// # Errors
///
/// Returns an error when the configured solver backend is unavailable.
pub fn build_optimizer(config: &Config) -> Result<Optimizer> {
    let solver = build_solver(&config.solver)?;
    Ok(Optimizer::new(solver, config.workforce_policy()))
}
