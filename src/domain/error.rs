//! Input validation errors for the workforce model.
//!
//! These errors are raised by the model input builder before any variable or
//! constraint is created, so a malformed request never reaches the solver.
//!
//! # Examples
//!
//! ```
//! use rightsize::domain::error::InputError;
//! use rightsize::domain::headcount::HeadcountKey;
//!
//! let result = HeadcountKey::parse("Operations-Manager");
//! assert!(matches!(result, Err(InputError::MalformedHeadcountKey { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when request data violates model invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// At least one function must be declared.
    #[error("function list cannot be empty")]
    EmptyFunctions,

    /// At least one role must be declared or configured.
    #[error("role list cannot be empty")]
    EmptyRoles,

    /// Function names must be unique.
    #[error("function '{function}' is declared more than once")]
    DuplicateFunction {
        /// The repeated function name.
        function: String,
    },

    /// Role names must be unique.
    #[error("role '{role}' is declared more than once")]
    DuplicateRole {
        /// The repeated role name.
        role: String,
    },

    /// Capacity per person must be strictly positive.
    #[error("capacity per person must be positive, got {capacity}")]
    NonPositiveCapacity {
        /// The invalid capacity that was provided.
        capacity: Decimal,
    },

    /// Workload entries may only reference declared functions.
    #[error("workload references undeclared function '{function}'")]
    UnknownWorkloadFunction {
        /// The undeclared function name.
        function: String,
    },

    /// Every declared function needs a workload entry.
    #[error("no workload supplied for function '{function}'")]
    MissingWorkload {
        /// The function without workload.
        function: String,
    },

    /// Workload hours cannot be negative.
    #[error("workload for function '{function}' must be non-negative, got {hours}")]
    NegativeWorkload {
        /// The function with invalid workload.
        function: String,
        /// The invalid hours value.
        hours: Decimal,
    },

    /// Headcount keys must have the form `<function>|<role>`.
    #[error("headcount key '{key}' is not of the form '<function>|<role>'")]
    MalformedHeadcountKey {
        /// The raw key.
        key: String,
    },

    /// Headcount keys may only reference declared functions.
    #[error("headcount key '{key}' references undeclared function '{function}'")]
    UnknownHeadcountFunction {
        /// The raw key.
        key: String,
        /// The undeclared function name.
        function: String,
    },

    /// Headcount keys may only reference declared roles.
    #[error("headcount key '{key}' references undeclared role '{role}'")]
    UnknownHeadcountRole {
        /// The raw key.
        key: String,
        /// The undeclared role name.
        role: String,
    },

    /// Headcount cannot be negative.
    #[error("headcount for '{key}' must be non-negative, got {count}")]
    NegativeHeadcount {
        /// The raw key.
        key: String,
        /// The invalid count.
        count: i64,
    },

    /// Headcount must fit the model's integer domain.
    #[error("headcount for '{key}' is too large: {count}")]
    HeadcountOutOfRange {
        /// The raw key.
        key: String,
        /// The invalid count.
        count: i64,
    },

    /// Role-share weights must lie in `[0, 1)`.
    #[error("role share for '{role}' must be in [0, 1), got {share}")]
    InvalidRoleShare {
        /// The role with an invalid share.
        role: String,
        /// The invalid share.
        share: Decimal,
    },

    /// A function's total headcount must fit the model's integer domain.
    #[error("total headcount for function '{function}' is too large")]
    HeadcountTotalOverflow {
        /// The function whose total overflows.
        function: String,
    },

    /// `Σ penalty[r] * N[f,r]` must be representable.
    #[error("removal cost overflows at function '{function}', role '{role}'")]
    RemovalCostOverflow {
        /// Function of the pair where the running cost overflowed.
        function: String,
        /// Role of the pair where the running cost overflowed.
        role: String,
    },

    /// Removal penalties must be strictly positive.
    #[error("removal penalty for '{role}' must be positive, got {penalty}")]
    NonPositivePenalty {
        /// The role with an invalid penalty.
        role: String,
        /// The invalid penalty.
        penalty: Decimal,
    },
}
