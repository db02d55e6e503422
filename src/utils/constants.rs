//! Constants Module - Single Source of Truth
//!
//! Endpoints, validation limits, mock tariff values and user-facing
//! messages live here. Other modules must not hardcode them.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "ShippingFeeProxy";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for outbound GHN requests
pub const USER_AGENT: &str = concat!("ShippingFeeProxy/", env!("CARGO_PKG_VERSION"));

/// Default timeout for upstream requests (seconds)
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Default HTTP port for the API server
pub const DEFAULT_PORT: u16 = 8080;

// ============================================
// GHN ENDPOINTS
// ============================================

/// Production gateway
pub const GHN_BASE_URL_PRODUCTION: &str = "https://online-gateway.ghn.vn";

/// Development / sandbox gateway
pub const GHN_BASE_URL_DEVELOPMENT: &str = "https://dev-online-gateway.ghn.vn";

pub const GHN_PROVINCE_PATH: &str = "/shiip/public-api/master-data/province";
pub const GHN_DISTRICT_PATH: &str = "/shiip/public-api/master-data/district";
pub const GHN_WARD_PATH: &str = "/shiip/public-api/master-data/ward";
pub const GHN_CALCULATE_FEE_PATH: &str = "/shiip/public-api/v2/shipping-order/fee";
pub const GHN_AVAILABLE_SERVICES_PATH: &str =
    "/shiip/public-api/v2/shipping-order/available-services";

/// GHN header carrying the API token (`Token`; header names are sent lowercase)
pub const GHN_TOKEN_HEADER: &str = "token";

/// GHN header carrying the numeric shop id (`ShopId`)
pub const GHN_SHOP_ID_HEADER: &str = "shopid";

/// Success code inside the GHN envelope (not the HTTP status)
pub const GHN_SUCCESS_CODE: i64 = 200;

// ============================================
// VALIDATION LIMITS
// ============================================

pub const MAX_WEIGHT_GRAMS: i64 = 50_000;
pub const MAX_INSURANCE_VALUE: i64 = 5_000_000;
pub const MAX_COD_VALUE: i64 = 5_000_000;
pub const MAX_DIMENSION_CM: i64 = 200;
pub const MIN_SERVICE_TYPE: i64 = 1;
pub const MAX_SERVICE_TYPE: i64 = 3;

// ============================================
// MOCK TARIFF
// ============================================

pub const MOCK_BASE_FEE: i64 = 15_000;
pub const MOCK_WEIGHT_UNIT_GRAMS: i64 = 500;
pub const MOCK_WEIGHT_FEE_PER_UNIT: i64 = 5_000;
pub const MOCK_DISTANCE_FEE: i64 = 20_000;

/// Insurance rate 0.5%, expressed as a fraction of 1000
pub const MOCK_INSURANCE_RATE_PER_MILLE: i64 = 5;

/// COD rate 1%, expressed as a fraction of 100
pub const MOCK_COD_RATE_PERCENT: i64 = 1;

// ============================================
// FIELD NAMES (validation errors)
// ============================================

pub const FIELD_TO_DISTRICT_ID: &str = "toDistrictId";
pub const FIELD_TO_WARD_CODE: &str = "toWardCode";
pub const FIELD_WEIGHT: &str = "weight";
pub const FIELD_SERVICE_TYPE_ID: &str = "serviceTypeId";
pub const FIELD_INSURANCE_VALUE: &str = "insuranceValue";
pub const FIELD_COD_VALUE: &str = "codValue";
pub const FIELD_LENGTH: &str = "length";
pub const FIELD_WIDTH: &str = "width";
pub const FIELD_HEIGHT: &str = "height";

// ============================================
// MESSAGES
// ============================================

pub const ERR_TO_DISTRICT_REQUIRED: &str = "Delivery district is required";
pub const ERR_TO_WARD_REQUIRED: &str = "Delivery ward is required";
pub const ERR_WEIGHT_REQUIRED: &str = "Weight is required";
pub const ERR_WEIGHT_INVALID: &str = "Weight must be greater than 0";
pub const ERR_WEIGHT_MAX_EXCEEDED: &str = "Weight cannot exceed 50000g (50kg)";
pub const ERR_SERVICE_TYPE_INVALID: &str =
    "Service type must be 1 (Express), 2 (Standard), or 3 (Economy)";
pub const ERR_INSURANCE_VALUE_NEGATIVE: &str = "Insurance value cannot be negative";
pub const ERR_INSURANCE_VALUE_MAX_EXCEEDED: &str = "Insurance value cannot exceed 5,000,000 VND";
pub const ERR_COD_VALUE_NEGATIVE: &str = "COD value cannot be negative";
pub const ERR_COD_VALUE_MAX_EXCEEDED: &str = "COD value cannot exceed 5,000,000 VND";
pub const ERR_DIMENSION_NEGATIVE: &str = "Dimension values cannot be negative";
pub const ERR_DIMENSION_MAX_EXCEEDED: &str = "Dimension cannot exceed 200cm";

pub const MSG_FEE_CALCULATION_SUCCESS: &str = "Fee calculation successful";
pub const MSG_FEE_CALCULATION_SUCCESS_MOCK: &str = "Fee calculation successful (Mock Data)";
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";

/// Build a full GHN URL from base and path, tolerating a trailing slash
pub fn build_ghn_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_ghn_url() {
        assert_eq!(
            build_ghn_url("https://dev-online-gateway.ghn.vn/", GHN_PROVINCE_PATH),
            "https://dev-online-gateway.ghn.vn/shiip/public-api/master-data/province"
        );
        assert_eq!(
            build_ghn_url(GHN_BASE_URL_PRODUCTION, GHN_CALCULATE_FEE_PATH),
            "https://online-gateway.ghn.vn/shiip/public-api/v2/shipping-order/fee"
        );
    }

    #[test]
    fn test_user_agent_matches_app_identity() {
        assert_eq!(USER_AGENT, format!("{}/{}", APP_NAME, APP_VERSION));
    }
}
