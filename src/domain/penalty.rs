//! Shortage penalty (big-M) policy.
//!
//! Every uncovered workload hour is charged `BIG_M` in the objective. The
//! charge only dominates removal decisions while `BIG_M` exceeds the largest
//! achievable removal cost `Σ penalty[r] * N[f,r]`, so the policy can either
//! keep the historical constant or derive the weight from the request.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Historical fixed shortage weight.
pub const DEFAULT_BIG_M: Decimal = dec!(10000);

/// How the per-hour shortage weight is chosen for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ShortagePenalty {
    /// Use a constant weight regardless of the request.
    Fixed {
        /// Weight charged per uncovered hour.
        value: Decimal,
    },
    /// Scale the weight with the maximum achievable removal cost.
    Adaptive {
        /// Safety multiple applied to `max_removal_cost + 1`.
        multiplier: Decimal,
    },
}

impl Default for ShortagePenalty {
    fn default() -> Self {
        Self::Fixed {
            value: DEFAULT_BIG_M,
        }
    }
}

impl ShortagePenalty {
    /// Resolve the weight for a request whose total removal cost is bounded
    /// by `max_removal_cost`.
    ///
    /// Adaptive mode never drops below [`DEFAULT_BIG_M`] and saturates at
    /// `Decimal::MAX`.
    #[must_use]
    pub fn resolve(&self, max_removal_cost: Decimal) -> Decimal {
        match *self {
            Self::Fixed { value } => value,
            Self::Adaptive { multiplier } => {
                let derived = max_removal_cost
                    .checked_add(Decimal::ONE)
                    .and_then(|bound| multiplier.checked_mul(bound))
                    .unwrap_or(Decimal::MAX);
                derived.max(DEFAULT_BIG_M)
            }
        }
    }

    /// True when the resolved weight strictly dominates every removal decision.
    #[must_use]
    pub fn dominates(&self, max_removal_cost: Decimal) -> bool {
        self.resolve(max_removal_cost) > max_removal_cost
    }

    /// Short name used in logs and CLI output.
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        match self {
            Self::Fixed { .. } => "fixed",
            Self::Adaptive { .. } => "adaptive",
        }
    }
}
