//! Mock fee estimator
//!
//! Deterministic placeholder tariff used when GHN is unconfigured or
//! unreachable. The constants are fixed contract values, not a real
//! carrier price list. Only called on requests that passed validation.

use crate::models::types::{FeeBreakdown, FeeRequest};
use crate::utils::constants::*;

/// Estimate the fee for an already validated request
pub fn estimate_mock(req: &FeeRequest) -> FeeBreakdown {
    let weight = req.weight.unwrap_or(0);
    let weight_fee = (weight / MOCK_WEIGHT_UNIT_GRAMS) * MOCK_WEIGHT_FEE_PER_UNIT;
    let distance_fee = if req.is_same_district() { 0 } else { MOCK_DISTANCE_FEE };
    let service_fee = MOCK_BASE_FEE + weight_fee + distance_fee;

    let insurance_fee = insurance_fee(req.insurance_value);
    let cod_fee = cod_fee(req.cod_value);

    FeeBreakdown {
        success: true,
        message: MSG_FEE_CALCULATION_SUCCESS_MOCK.to_string(),
        total: service_fee + insurance_fee + cod_fee,
        service_fee,
        insurance_fee,
        cod_fee,
        ..Default::default()
    }
}

/// 0.5% of declared value, floored
fn insurance_fee(value: Option<i64>) -> i64 {
    match value {
        Some(v) if v > 0 => v * MOCK_INSURANCE_RATE_PER_MILLE / 1000,
        _ => 0,
    }
}

/// 1% of COD amount, floored
fn cod_fee(value: Option<i64>) -> i64 {
    match value {
        Some(v) if v > 0 => v * MOCK_COD_RATE_PERCENT / 100,
        _ => 0,
    }
}
