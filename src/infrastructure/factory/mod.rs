//! Factory modules for building infrastructure components.
//!
//! - [`solver`] - MILP backend construction
//! - [`optimizer`] - Optimization service wiring

pub mod optimizer;
pub mod solver;
