//! Infrastructure configuration modules.

pub mod logging;
pub mod policy;
pub mod settings;
pub mod solver;

pub use settings::Config;
