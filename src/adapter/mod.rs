//! Adapters connecting the application to the outside world.
//!
//! ```text
//! cli ──► OptimizePort ──► Optimizer ──► Solver ◄── HiGHSSolver
//! ```

pub mod inbound;
pub mod outbound;
