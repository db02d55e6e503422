//! API Request Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Json, Path, Query, State,
    },
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{info, warn};

use super::types::*;
use crate::core::ShippingService;
use crate::models::errors::ErrorCode;
use crate::models::types::{District, FeeBreakdown, FeeRequest, Province, ServiceOption, Ward};

/// Shared application state
pub struct AppState {
    pub service: ShippingService,
}

impl AppState {
    pub fn new(service: ShippingService) -> Self {
        Self { service }
    }
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<T>>)>;

fn status_for(code: ErrorCode) -> StatusCode {
    StatusCode::from_u16(code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Envelope for a request that could not be decoded
fn bad_request<T>(message: String) -> (StatusCode, Json<ApiResponse<T>>) {
    warn!("Rejected request: {}", message);
    (status_for(ErrorCode::ApiBadRequest), Json(ApiResponse::error(message)))
}

// ============================================
// Health Check
// ============================================

pub async fn health_check() -> Json<ApiResponse<String>> {
    Json(ApiResponse::success("OK".to_string(), "API is running normally"))
}

// ============================================
// Address lookup
// ============================================

pub async fn get_provinces(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<Province>>> {
    info!("📍 GET /api/shipping/provinces");

    let provinces = state.service.provinces().await;
    let message = format!("Retrieved {} provinces", provinces.len());
    Json(ApiResponse::success(provinces, message))
}

pub async fn get_districts(
    State(state): State<Arc<AppState>>,
    Path(province_id): Path<i64>,
) -> Json<ApiResponse<Vec<District>>> {
    info!("📍 GET /api/shipping/districts/{}", province_id);

    let districts = state.service.districts(province_id).await;
    let message = format!("Retrieved {} districts", districts.len());
    Json(ApiResponse::success(districts, message))
}

pub async fn get_wards(
    State(state): State<Arc<AppState>>,
    Path(district_id): Path<i64>,
) -> Json<ApiResponse<Vec<Ward>>> {
    info!("📍 GET /api/shipping/wards/{}", district_id);

    let wards = state.service.wards(district_id).await;
    let message = format!("Retrieved {} wards", wards.len());
    Json(ApiResponse::success(wards, message))
}

pub async fn get_services(
    State(state): State<Arc<AppState>>,
    Path(to_district_id): Path<i64>,
    query: Result<Query<ServicesQuery>, QueryRejection>,
) -> ApiResult<Vec<ServiceOption>> {
    let Query(query) = query
        .map_err(|rejection| bad_request(format!("Invalid query: {}", rejection.body_text())))?;

    info!(
        "🚚 GET /api/shipping/services/{} (from {:?})",
        to_district_id, query.from_district_id
    );

    let services = state
        .service
        .available_services(query.from_district_id, to_district_id)
        .await;
    let message = format!("Retrieved {} services", services.len());
    Ok(Json(ApiResponse::success(services, message)))
}

// ============================================
// Fee calculation
// ============================================

pub async fn calculate_fee(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FeeRequest>, JsonRejection>,
) -> ApiResult<FeeBreakdown> {
    let Json(req) = payload
        .map_err(|rejection| bad_request(format!("Invalid request body: {}", rejection.body_text())))?;

    info!(
        "💰 POST /api/shipping/calculate: district {:?} -> {:?}, {:?}g",
        req.from_district_id, req.to_district_id, req.weight
    );

    let result = state.service.calculate_fee(&req).await;

    let message = result.message.clone();
    if result.success {
        return Ok(Json(ApiResponse::success(result, message)));
    }

    let code = if result.errors.is_empty() {
        ErrorCode::UpstreamRejected
    } else {
        ErrorCode::ApiValidationFailed
    };
    Err((status_for(code), Json(ApiResponse::failure(result, message))))
}
