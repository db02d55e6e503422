//! Shipping service - request orchestration
//!
//! validate -> GHN (if configured) -> mock fallback.
//!
//! Fallback policy: any transport or protocol failure talking to GHN is
//! logged and answered from mock data. A business refusal from GHN
//! (`success == false` in an `Ok` result) is passed through untouched.
//! The same two tiers apply to every address listing.

use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::{mock_address, mock_fee, validator};
use crate::models::config::GhnConfig;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::{District, FeeBreakdown, FeeRequest, Province, ServiceOption, Ward};
use crate::providers::{GhnClient, ShippingGateway};
use crate::utils::constants::ERR_VALIDATION_FAILED;

/// Where a result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Upstream,
    Mock,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upstream => "upstream",
            Self::Mock => "mock",
        }
    }
}

/// Orchestrates validation, the carrier gateway and mock fallback
#[derive(Clone)]
pub struct ShippingService {
    gateway: Option<Arc<dyn ShippingGateway>>,
}

impl ShippingService {
    /// Build from config: GHN when a token is present, mock-only otherwise
    pub fn from_config(config: &GhnConfig) -> AppResult<Self> {
        if !config.is_configured() {
            return Ok(Self::mock_only());
        }
        let client = GhnClient::new(config)?;
        Ok(Self::with_gateway(Arc::new(client)))
    }

    pub fn with_gateway(gateway: Arc<dyn ShippingGateway>) -> Self {
        Self {
            gateway: Some(gateway),
        }
    }

    pub fn mock_only() -> Self {
        Self { gateway: None }
    }

    /// Whether an upstream gateway is configured
    pub fn source(&self) -> DataSource {
        if self.gateway.is_some() {
            DataSource::Upstream
        } else {
            DataSource::Mock
        }
    }

    /// Validate, then price via GHN or mock data
    pub async fn calculate_fee(&self, req: &FeeRequest) -> FeeBreakdown {
        let errors = validator::validate(req);
        if !errors.is_empty() {
            warn!("Validation failed with {} errors", errors.len());
            return FeeBreakdown::validation_failed(ERR_VALIDATION_FAILED, errors);
        }

        self.with_fallback("calculate fee", |gw| gw.calculate_fee(req), || mock_fee::estimate_mock(req))
            .await
    }

    pub async fn provinces(&self) -> Vec<Province> {
        self.with_fallback("list provinces", |gw| gw.provinces(), mock_address::provinces)
            .await
    }

    pub async fn districts(&self, province_id: i64) -> Vec<District> {
        self.with_fallback(
            "list districts",
            |gw| gw.districts(province_id),
            || mock_address::districts(province_id),
        )
        .await
    }

    pub async fn wards(&self, district_id: i64) -> Vec<Ward> {
        self.with_fallback(
            "list wards",
            |gw| gw.wards(district_id),
            || mock_address::wards(district_id),
        )
        .await
    }

    pub async fn available_services(&self, from_district: Option<i64>, to_district: i64) -> Vec<ServiceOption> {
        self.with_fallback(
            "list services",
            |gw| gw.available_services(from_district, to_district),
            || mock_address::services(from_district, to_district),
        )
        .await
    }

    /// Run `call` against the gateway if there is one, else or on error use `mock`
    async fn with_fallback<'a, T, F, Fut, M>(&'a self, operation: &str, call: F, mock: M) -> T
    where
        F: FnOnce(&'a dyn ShippingGateway) -> Fut,
        Fut: Future<Output = AppResult<T>>,
        M: FnOnce() -> T,
    {
        let Some(gateway) = self.gateway.as_deref() else {
            debug!("No GHN token, serving mock data for {}", operation);
            return mock();
        };

        match call(gateway).await {
            Ok(result) => result,
            Err(e) => {
                log_fallback(gateway.name(), operation, &e);
                mock()
            }
        }
    }
}

fn log_fallback(gateway: &str, operation: &str, err: &AppError) {
    if err.code.is_upstream_unavailable() {
        warn!(code = err.code_str(), "⚠️ {} failed to {}: {}. Using mock data", gateway, operation, err);
    } else {
        error!(code = err.code_str(), "❌ {} failed to {}: {}. Using mock data", gateway, operation, err);
    }
}
