//! Infrastructure layer: configuration and dependency wiring.

pub mod config;
pub mod factory;
