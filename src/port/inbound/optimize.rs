//! Inbound optimize port and its request type.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::OptimizationReport;
use crate::error::Result;

/// One optimization request as supplied by the ingestion/transport side.
///
/// Field names follow the external contract: `F`, `R`, `W`, `C`,
/// `N_current`, `alpha`, `penalty`. `R`, `alpha` and `penalty` may be
/// omitted, in which case the configured workforce policy supplies them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// Declared functions, in report order.
    #[serde(rename = "F")]
    pub functions: Vec<String>,

    /// Declared roles, in report order.
    #[serde(rename = "R", default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,

    /// Required productive hours per function.
    #[serde(rename = "W")]
    pub workload: BTreeMap<String, Decimal>,

    /// Productive hours per person per day.
    #[serde(rename = "C")]
    pub capacity: Decimal,

    /// Current headcount keyed by `"<function>|<role>"`.
    ///
    /// Signed so that negative counts reach validation instead of failing
    /// deserialization with an opaque message.
    #[serde(rename = "N_current", default)]
    pub headcount: BTreeMap<String, i64>,

    /// Minimum role-share weights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<BTreeMap<String, Decimal>>,

    /// Removal penalty weights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty: Option<BTreeMap<String, Decimal>>,
}

/// Request/response capability consumed by inbound adapters.
///
/// Each call is independent: implementations build a fresh model per request
/// and hold no per-request state, so one instance may serve concurrent calls.
pub trait OptimizePort: Send + Sync {
    /// Compute the minimal-disruption headcount plan for a request.
    ///
    /// # Errors
    ///
    /// Returns an input error for invalid requests, a solve failure when the
    /// solver reports neither optimal nor feasible, and an unavailable error
    /// when the backend cannot be invoked. No partial result is returned.
    fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizationReport>;
}
