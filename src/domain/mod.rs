//! Domain types for workforce redeployment.
//!
//! Pure data and invariants: identifiers, the headcount matrix, the canonical
//! model input, solver-neutral constraints and the resulting report. Nothing in
//! here talks to a solver or reads configuration.

pub mod constraint;
pub mod error;
pub mod headcount;
pub mod id;
pub mod input;
pub mod penalty;
pub mod policy;
pub mod report;

pub use constraint::{Constraint, ConstraintSense, VariableBounds};
pub use error::InputError;
pub use headcount::{HeadcountKey, HeadcountMatrix, KEY_SEPARATOR};
pub use id::{FunctionName, RoleName};
pub use input::ModelInput;
pub use penalty::{ShortagePenalty, DEFAULT_BIG_M};
pub use policy::WorkforcePolicy;
pub use report::{AllocationRow, FunctionSummary, OptimizationReport};
