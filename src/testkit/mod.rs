//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`solver`] - Scripted [`Solver`](crate::port::outbound::solver::Solver)
//!   implementations: `ScriptedSolver`, `UnavailableSolver`.
//! - [`request`] - Fluent [`OptimizeRequest`](crate::port::inbound::optimize::OptimizeRequest)
//!   builder and the canonical scenarios.

pub mod request;
pub mod solver;
