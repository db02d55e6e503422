//! GHN (Giao Hàng Nhanh) API Client
//!
//! Implements the carrier side of the proxy:
//! 1. Master data - provinces, districts, wards (GET)
//! 2. Fee calculation (POST)
//! 3. Available services between two districts (POST)
//!
//! Every GHN response is an envelope `{ code, message, data }` where
//! `code == 200` means success. GHN reports business errors with HTTP
//! 4xx plus a normal envelope, so 4xx bodies are read as envelopes.
//! HTTP 5xx is treated as an outage whatever the body says.
//!
//! API: https://api.ghn.vn/home/docs/detail
//! Auth: `Token` and `ShopId` headers on every request

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_ENCODING, CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::gateway::ShippingGateway;
use crate::models::config::GhnConfig;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::{District, FeeBreakdown, FeeRequest, Province, ServiceOption, Ward};
use crate::utils::coerce::{coerce_i64, coerce_string, field};
use crate::utils::constants::{
    build_ghn_url, GHN_AVAILABLE_SERVICES_PATH, GHN_CALCULATE_FEE_PATH, GHN_DISTRICT_PATH,
    GHN_PROVINCE_PATH, GHN_SHOP_ID_HEADER, GHN_SUCCESS_CODE, GHN_TOKEN_HEADER, GHN_WARD_PATH,
    MSG_FEE_CALCULATION_SUCCESS, USER_AGENT as USER_AGENT_CONST,
};

// ============================================
// WIRE TYPES
// ============================================

/// Fee request body in GHN's format. Optional fields are omitted, never
/// sent as null or zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GhnFeePayload<'a> {
    pub to_district_id: i64,
    pub to_ward_code: &'a str,
    pub weight: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_district_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_ward_code: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_failed_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<&'a str>,
}

impl<'a> GhnFeePayload<'a> {
    /// Map an internal request; fails if a required field is missing
    pub fn from_request(req: &'a FeeRequest) -> AppResult<Self> {
        let to_district_id = req
            .to_district_id
            .ok_or_else(|| AppError::bad_request("to_district_id is required"))?;
        let to_ward_code = req
            .to_ward_code
            .as_deref()
            .ok_or_else(|| AppError::bad_request("to_ward_code is required"))?;
        let weight = req
            .weight
            .ok_or_else(|| AppError::bad_request("weight is required"))?;

        Ok(Self {
            to_district_id,
            to_ward_code,
            weight,
            service_id: req.service_id,
            service_type_id: req.service_type_id,
            from_district_id: req.from_district_id,
            from_ward_code: req.from_ward_code.as_deref(),
            length: req.length,
            width: req.width,
            height: req.height,
            insurance_value: req.insurance_value,
            cod_value: req.cod_value,
            cod_failed_amount: req.cod_failed_amount,
            coupon: req.coupon.as_deref(),
        })
    }
}

/// Available-services request body
#[derive(Debug, Clone, Serialize)]
struct GhnServicesPayload {
    shop_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    from_district: Option<i64>,
    to_district: i64,
}

/// Decoded GHN envelope with loosely typed fields already coerced
#[derive(Debug, Clone)]
pub struct GhnEnvelope {
    pub code: i64,
    pub message: String,
    pub data: Value,
}

impl GhnEnvelope {
    /// Parse a raw response body
    pub fn parse(body: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(AppError::invalid_response("GHN response is not a JSON object"));
        }

        Ok(Self {
            code: coerce_i64(field(&value, "code")),
            message: coerce_string(field(&value, "message")),
            data: field(&value, "data").cloned().unwrap_or(Value::Null),
        })
    }

    pub fn is_success(&self) -> bool {
        self.code == GHN_SUCCESS_CODE
    }

    /// Provider message, or a generic one when GHN sent none
    fn failure_message(&self) -> String {
        if self.message.is_empty() {
            format!("GHN returned code {}", self.code)
        } else {
            self.message.clone()
        }
    }

    /// `data` as a list, requiring a success code
    fn into_items(self) -> AppResult<Vec<Value>> {
        if !self.is_success() {
            return Err(AppError::upstream_rejected(self.code, self.failure_message()));
        }
        match self.data {
            Value::Array(items) => Ok(items),
            // GHN sends `data: null` for an empty list
            Value::Null => Ok(Vec::new()),
            _ => Err(AppError::invalid_response("GHN data is not a list")),
        }
    }
}

// ============================================
// RESPONSE MAPPING
// ============================================

/// Map a fee envelope into a breakdown.
///
/// Non-success codes are a domain failure (`Ok`, `success == false`).
/// A success code without an object `data` is a protocol error.
pub fn map_fee_envelope(envelope: GhnEnvelope) -> AppResult<FeeBreakdown> {
    if !envelope.is_success() {
        return Ok(FeeBreakdown::rejected(envelope.failure_message()));
    }

    let data = &envelope.data;
    if !data.is_object() {
        return Err(AppError::invalid_response("GHN fee response has no data object"));
    }
    let fee = |key: &str| coerce_i64(field(data, key));

    Ok(FeeBreakdown {
        success: true,
        message: MSG_FEE_CALCULATION_SUCCESS.to_string(),
        errors: Vec::new(),
        total: fee("total"),
        service_fee: fee("service_fee"),
        insurance_fee: fee("insurance_fee"),
        pick_station_fee: fee("pick_station_fee"),
        coupon_value: fee("coupon_value"),
        r2s_fee: fee("r2s_fee"),
        document_return: fee("document_return"),
        double_check: fee("double_check"),
        cod_fee: fee("cod_fee"),
        pick_remote_areas_fee: fee("pick_remote_areas_fee"),
        deliver_remote_areas_fee: fee("deliver_remote_areas_fee"),
        cod_failed_fee: fee("cod_failed_fee"),
    })
}

fn map_province(item: &Value) -> Province {
    Province {
        province_id: coerce_i64(field(item, "ProvinceID")),
        province_name: coerce_string(field(item, "ProvinceName")),
        code: coerce_string(field(item, "Code")),
    }
}

fn map_district(item: &Value, province_id: i64) -> District {
    District {
        id: coerce_i64(field(item, "DistrictID")),
        name: coerce_string(field(item, "DistrictName")),
        province_id,
    }
}

fn map_ward(item: &Value, district_id: i64) -> Ward {
    Ward {
        // WardCode arrives as either string or integer
        ward_code: coerce_string(field(item, "WardCode")),
        name: coerce_string(field(item, "WardName")),
        district_id,
    }
}

fn map_service(item: &Value) -> ServiceOption {
    ServiceOption {
        service_id: coerce_i64(field(item, "service_id")),
        short_name: coerce_string(field(item, "short_name")),
        service_type_id: coerce_i64(field(item, "service_type_id")),
    }
}

// ============================================
// GHN API CLIENT
// ============================================

/// GHN API client. Credentials are baked into default headers.
#[derive(Clone)]
pub struct GhnClient {
    client: reqwest::Client,
    base_url: String,
    shop_id: i64,
}

impl GhnClient {
    /// Create a client; fails when no token is configured
    pub fn new(config: &GhnConfig) -> AppResult<Self> {
        if !config.is_configured() {
            return Err(AppError::missing_token());
        }

        let client = Self::build_client(config)?;
        info!("🚚 GHN client ready for {}", config.base_url);

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            shop_id: config.shop_id,
        })
    }

    /// HTTP client with auth headers, gzip and timeout
    fn build_client(config: &GhnConfig) -> AppResult<reqwest::Client> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_CONST));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));

        let mut token = HeaderValue::from_str(&config.token)
            .map_err(|_| AppError::invalid_config("GHN_API_TOKEN contains invalid header characters"))?;
        token.set_sensitive(true);
        headers.insert(GHN_TOKEN_HEADER, token);
        headers.insert(GHN_SHOP_ID_HEADER, HeaderValue::from(config.shop_id));

        reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))
    }

    fn url(&self, path: &str) -> String {
        build_ghn_url(&self.base_url, path)
    }

    async fn get_envelope(&self, path: &str, query: &[(&str, i64)]) -> AppResult<GhnEnvelope> {
        let url = self.url(path);
        debug!("GHN GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        Self::read_envelope(response).await
    }

    async fn post_envelope<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> AppResult<GhnEnvelope> {
        let url = self.url(path);
        if tracing::enabled!(tracing::Level::DEBUG) {
            debug!("GHN POST {} body={}", url, serde_json::to_string(body).unwrap_or_default());
        }

        let response = self.client.post(&url).json(body).send().await?;
        Self::read_envelope(response).await
    }

    /// 4xx bodies are still envelopes; 5xx means GHN itself is down
    async fn read_envelope(response: reqwest::Response) -> AppResult<GhnEnvelope> {
        let status = response.status();
        if status.is_server_error() {
            warn!("⚠️ GHN answered HTTP {}", status);
            return Err(AppError::upstream_server_error(status.as_u16()));
        }
        let body = response.text().await?;

        GhnEnvelope::parse(&body).map_err(|e| {
            warn!("⚠️ Unparsable GHN response (HTTP {}): {}", status, e);
            AppError::invalid_response(format!("HTTP {} with unparsable body", status))
        })
    }
}

#[async_trait]
impl ShippingGateway for GhnClient {
    fn name(&self) -> &'static str {
        "GHN"
    }

    async fn calculate_fee(&self, req: &FeeRequest) -> AppResult<FeeBreakdown> {
        let payload = GhnFeePayload::from_request(req)?;
        let envelope = self.post_envelope(GHN_CALCULATE_FEE_PATH, &payload).await?;

        if !envelope.is_success() {
            info!("GHN rejected fee request (code {}): {}", envelope.code, envelope.message);
        }
        map_fee_envelope(envelope)
    }

    async fn provinces(&self) -> AppResult<Vec<Province>> {
        let items = self.get_envelope(GHN_PROVINCE_PATH, &[]).await?.into_items()?;
        Ok(items.iter().map(map_province).collect())
    }

    async fn districts(&self, province_id: i64) -> AppResult<Vec<District>> {
        let items = self
            .get_envelope(GHN_DISTRICT_PATH, &[("province_id", province_id)])
            .await?
            .into_items()?;
        Ok(items.iter().map(|item| map_district(item, province_id)).collect())
    }

    async fn wards(&self, district_id: i64) -> AppResult<Vec<Ward>> {
        let items = self
            .get_envelope(GHN_WARD_PATH, &[("district_id", district_id)])
            .await?
            .into_items()?;
        Ok(items.iter().map(|item| map_ward(item, district_id)).collect())
    }

    async fn available_services(
        &self,
        from_district: Option<i64>,
        to_district: i64,
    ) -> AppResult<Vec<ServiceOption>> {
        let payload = GhnServicesPayload {
            shop_id: self.shop_id,
            from_district,
            to_district,
        };
        let items = self
            .post_envelope(GHN_AVAILABLE_SERVICES_PATH, &payload)
            .await?
            .into_items()?;
        Ok(items.iter().map(map_service).collect())
    }
}
