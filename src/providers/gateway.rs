//! Upstream gateway seam
//!
//! The orchestrator only talks to this trait, so the GHN client can be
//! swapped for a stub in tests.

use async_trait::async_trait;

use crate::models::errors::AppResult;
use crate::models::types::{District, FeeBreakdown, FeeRequest, Province, ServiceOption, Ward};

/// Address lookup and fee calculation against a carrier API
#[async_trait]
pub trait ShippingGateway: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Calculate the fee for a validated request.
    ///
    /// A business-level refusal by the carrier is `Ok` with
    /// `success == false`; `Err` means the carrier could not be used.
    async fn calculate_fee(&self, req: &FeeRequest) -> AppResult<FeeBreakdown>;

    async fn provinces(&self) -> AppResult<Vec<Province>>;

    async fn districts(&self, province_id: i64) -> AppResult<Vec<District>>;

    async fn wards(&self, district_id: i64) -> AppResult<Vec<Ward>>;

    async fn available_services(
        &self,
        from_district: Option<i64>,
        to_district: i64,
    ) -> AppResult<Vec<ServiceOption>>;
}
