//! Utils Module - Helper Functions & Shared Utilities
//!
//! Constants and loose-JSON coercion shared across the crate.

pub mod coerce;
pub mod constants;

pub use coerce::*;
pub use constants::*;
