//! Rightsize - minimal-disruption workforce redeployment.
//!
//! Given functions with required workload, roles, per-person capacity and the
//! current headcount per (function, role) pair, computes the smallest set of
//! removals that keeps workload covered and role-share floors intact. The
//! model is a mixed-integer linear program solved through HiGHS.
//!
//! # Architecture
//!
//! - [`domain`] - Identifiers, headcount matrix, model input, report types
//! - [`port`] - The inbound `OptimizePort` and the outbound `Solver` port
//! - [`application`] - Validation, formulation, projection, the `Optimizer`
//! - [`adapter`] - CLI, JSON contract and the HiGHS solver backend
//! - [`infrastructure`] - Configuration loading and dependency wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use rightsize::adapter::outbound::solver::HiGHSSolver;
//! use rightsize::application::Optimizer;
//! use rightsize::domain::WorkforcePolicy;
//! use rightsize::port::inbound::optimize::{OptimizePort, OptimizeRequest};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request: OptimizeRequest = serde_json::from_str(
//!         r#"{"F":["Ops"],"R":["Manager"],"W":{"Ops":10},"C":6.5,"N_current":{"Ops|Manager":3}}"#,
//!     )?;
//!     let optimizer = Optimizer::new(Arc::new(HiGHSSolver::new()), WorkforcePolicy::default());
//!     let report = optimizer.optimize(&request)?;
//!     println!("removed {}", report.total_removed());
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
