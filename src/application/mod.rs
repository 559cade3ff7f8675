//! Application layer: the optimization pipeline.
//!
//! - [`builder`] - request validation and default filling
//! - [`formulation`] - variables, constraints and weighted objective
//! - [`projection`] - solved values to report rows
//! - [`optimizer`] - the [`OptimizePort`](crate::port::inbound::optimize::OptimizePort) service

pub mod builder;
pub mod formulation;
pub mod optimizer;
pub mod projection;

pub use builder::ModelInputBuilder;
pub use formulation::{formulate, Formulation, VariableLayout};
pub use optimizer::Optimizer;
pub use projection::project;
