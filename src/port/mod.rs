//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌──────────────┐      ┌────────────────────────┐      ┌──────────────┐
//!   │ CLI / caller │ ───▶ │ OptimizePort (inbound) │ ───▶ │ Solver       │
//!   │   adapter    │      │  application::Optimizer│      │ (outbound)   │
//!   └──────────────┘      └────────────────────────┘      └──────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`inbound::optimize::OptimizePort`] - request/response optimization
//! - [`outbound::solver::Solver`] - MILP optimization backend

pub mod inbound;
pub mod outbound;
