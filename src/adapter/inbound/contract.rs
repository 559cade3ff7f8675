//! Response envelope of the optimize contract.
//!
//! Every outcome of an optimize call is mapped to one of two shapes:
//!
//! ```json
//! { "status": "ok", "rows": [ { "Function": "Ops", "Role": "Manager", ... } ] }
//! { "status": "error", "message": "Model infeasible" }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{AllocationRow, OptimizationReport};
use crate::error::{Error, Result, SolveError};

/// Message returned for every solve that ends without a usable solution.
pub const INFEASIBLE_MESSAGE: &str = "Model infeasible";

/// Wire response for one optimize call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum OptimizeResponse {
    Ok { rows: Vec<AllocationRow> },
    Error { message: String },
}

impl OptimizeResponse {
    /// Convert the outcome of an optimize call into its envelope.
    #[must_use]
    pub fn from_result(result: Result<OptimizationReport>) -> Self {
        match result {
            Ok(report) => Self::Ok { rows: report.rows },
            Err(err) => Self::from_error(&err),
        }
    }

    /// Envelope for a failed call.
    ///
    /// Solve failures collapse to [`INFEASIBLE_MESSAGE`] whatever the status;
    /// other errors keep their own description.
    #[must_use]
    pub fn from_error(err: &Error) -> Self {
        let message = match err {
            Error::Solve(SolveError::Failed { .. }) => INFEASIBLE_MESSAGE.to_string(),
            other => other.to_string(),
        };
        Self::Error { message }
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// Error message, if this is an error envelope.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ok { .. } => None,
            Self::Error { message } => Some(message),
        }
    }
}
