//! Shipping Fee Library
//!
//! Backend proxy for Vietnamese address data and shipping fee
//! calculation:
//! - Province / district / ward / service listings from GHN
//! - Validated fee calculation with an itemized breakdown
//! - Deterministic mock data whenever GHN is unconfigured or unreachable

pub mod api;
pub mod core;
pub mod models;
pub mod providers;
pub mod utils;

pub use crate::core::{estimate_mock, validate, DataSource, ShippingService};
pub use models::{
    AppError, AppResult, District, ErrorCode, FeeBreakdown, FeeRequest, FieldError, GhnConfig,
    GhnEnvironment, Province, ServerConfig, ServiceOption, Ward,
};
pub use providers::{GhnClient, ShippingGateway};
