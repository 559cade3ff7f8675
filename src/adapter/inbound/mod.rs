//! Inbound adapters (driving side).
//!
//! - [`contract`] - JSON response envelope of the optimize contract
//! - [`cli`] - command-line interface

pub mod cli;
pub mod contract;
