use thiserror::Error;

use crate::domain::error::InputError;
use crate::port::outbound::solver::SolutionStatus;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Solver invocation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The solver terminated without an optimal or feasible solution.
    #[error("solver terminated with status {status}")]
    Failed { status: SolutionStatus },

    /// The solving backend cannot be invoked at all.
    #[error("solver backend '{backend}' is unavailable: {reason}")]
    Unavailable { backend: String, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for errors caused by the request rather than the environment.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }

    /// True when the solver ran but produced no usable solution.
    #[must_use]
    pub const fn is_solve_failure(&self) -> bool {
        matches!(self, Self::Solve(SolveError::Failed { .. }))
    }
}
