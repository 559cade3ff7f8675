//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! The only infrastructure dependency of the optimizer is the MILP solver.

pub mod solver;
