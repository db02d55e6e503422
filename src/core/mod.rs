//! Core Module - Business Logic
//!
//! Validation, mock tariff, built-in address data and the orchestrator
//! that ties them to the carrier gateway.

pub mod mock_address;
pub mod mock_fee;
pub mod service;
pub mod validator;

pub use mock_fee::estimate_mock;
pub use service::*;
pub use validator::validate;
