//! Solver implementations for mixed-integer linear programming.
//!
//! Implements the [`Solver`](crate::port::outbound::solver::Solver) port with
//! concrete backends.

mod highs;

pub use highs::HiGHSSolver;
