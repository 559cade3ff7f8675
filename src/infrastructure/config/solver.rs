//! Solver backend configuration.

use serde::Deserialize;

/// Backend name of the bundled HiGHS solver.
pub const HIGHS_BACKEND: &str = "highs";

/// Settings for the MILP backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Backend identifier. Only `"highs"` is linked.
    pub backend: String,
    /// Wall-clock limit per solve; the best incumbent is kept when hit.
    pub time_limit_secs: Option<f64>,
    /// Forward the backend's own progress log to stdout.
    pub verbose: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            backend: HIGHS_BACKEND.to_string(),
            time_limit_secs: None,
            verbose: false,
        }
    }
}
