//! Providers Module - External Data Sources
//!
//! The carrier API and the trait the orchestrator uses to reach it.

pub mod gateway;
pub mod ghn;

pub use gateway::*;
pub use ghn::*;
