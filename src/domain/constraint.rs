//! Mathematical constraint types for optimization.
//!
//! These types describe the staffing model in solver-neutral form: sparse
//! linear rows over indexed variables plus per-variable bounds.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single linear constraint: `sum(coeff * x[index]) {>=, <=, =} rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Row label used in logs (e.g. `workload_cover[Ops]`).
    pub name: String,
    /// Sparse `(variable index, coefficient)` terms.
    pub terms: Vec<(usize, Decimal)>,
    /// Constraint sense (>=, <=, =).
    pub sense: ConstraintSense,
    /// Right-hand side value.
    pub rhs: Decimal,
}

impl Constraint {
    /// Create a >= constraint.
    #[must_use]
    pub fn geq(name: impl Into<String>, terms: Vec<(usize, Decimal)>, rhs: Decimal) -> Self {
        Self {
            name: name.into(),
            terms,
            sense: ConstraintSense::GreaterEqual,
            rhs,
        }
    }

    /// Create a <= constraint.
    #[must_use]
    pub fn leq(name: impl Into<String>, terms: Vec<(usize, Decimal)>, rhs: Decimal) -> Self {
        Self {
            name: name.into(),
            terms,
            sense: ConstraintSense::LessEqual,
            rhs,
        }
    }

    /// Create an = constraint.
    #[must_use]
    pub fn eq(name: impl Into<String>, terms: Vec<(usize, Decimal)>, rhs: Decimal) -> Self {
        Self {
            name: name.into(),
            terms,
            sense: ConstraintSense::Equal,
            rhs,
        }
    }

    /// Evaluate the left-hand side at a point.
    #[must_use]
    pub fn lhs(&self, values: &[Decimal]) -> Decimal {
        self.terms
            .iter()
            .map(|(index, coeff)| {
                coeff.saturating_mul(values.get(*index).copied().unwrap_or(Decimal::ZERO))
            })
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Check the constraint at a point, allowing `tolerance` of slack.
    #[must_use]
    pub fn is_satisfied(&self, values: &[Decimal], tolerance: Decimal) -> bool {
        let lhs = self.lhs(values);
        match self.sense {
            ConstraintSense::GreaterEqual => lhs + tolerance >= self.rhs,
            ConstraintSense::LessEqual => lhs - tolerance <= self.rhs,
            ConstraintSense::Equal => (lhs - self.rhs).abs() <= tolerance,
        }
    }
}

/// Constraint sense (comparison operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintSense {
    /// Greater than or equal (>=).
    GreaterEqual,
    /// Less than or equal (<=).
    LessEqual,
    /// Equal (=).
    Equal,
}

impl fmt::Display for ConstraintSense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GreaterEqual => write!(f, ">="),
            Self::LessEqual => write!(f, "<="),
            Self::Equal => write!(f, "="),
        }
    }
}

/// Bounds on a variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableBounds {
    /// Lower bound (None = -infinity).
    pub lower: Option<Decimal>,
    /// Upper bound (None = +infinity).
    pub upper: Option<Decimal>,
}

impl Default for VariableBounds {
    fn default() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: None,
        }
    }
}

impl VariableBounds {
    /// Binary variable bounds [0, 1].
    #[must_use]
    pub const fn binary() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: Some(Decimal::ONE),
        }
    }

    /// Non-negative variable [0, +inf).
    #[must_use]
    pub fn non_negative() -> Self {
        Self::default()
    }

    /// Bounded variable [lower, upper].
    #[must_use]
    pub const fn bounded(lower: Decimal, upper: Decimal) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }
}
