//! Inbound ports (driving side): capabilities exposed to CLI and service adapters.

pub mod optimize;
