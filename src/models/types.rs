//! Type definitions for the shipping proxy
//! Address units, fee request/response and field errors

use serde::{Deserialize, Serialize};

// ============================================
// Address units
// ============================================

/// Province / city (level 1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Province {
    pub province_id: i64,
    pub province_name: String,
    pub code: String,
}

impl Province {
    pub fn new(province_id: i64, province_name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            province_id,
            province_name: province_name.into(),
            code: code.into(),
        }
    }
}

/// District (level 2)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub id: i64,
    pub name: String,
    pub province_id: i64,
}

impl District {
    pub fn new(id: i64, name: impl Into<String>, province_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            province_id,
        }
    }
}

/// Ward (level 3). GHN ward codes are strings even when numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ward {
    pub ward_code: String,
    pub name: String,
    pub district_id: i64,
}

impl Ward {
    pub fn new(ward_code: impl Into<String>, name: impl Into<String>, district_id: i64) -> Self {
        Self {
            ward_code: ward_code.into(),
            name: name.into(),
            district_id,
        }
    }
}

/// A carrier service available between two districts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOption {
    pub service_id: i64,
    pub short_name: String,
    pub service_type_id: i64,
}

// ============================================
// Fee request
// ============================================

/// Incoming fee calculation request.
///
/// Every field is optional at the type level so that missing required
/// fields surface as validation errors instead of JSON rejections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRequest {
    /// Pickup district; the shop's default address is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_district_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_ward_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_district_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_ward_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i64>,
    /// 1 = Express, 2 = Standard, 3 = Economy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type_id: Option<i64>,

    /// Grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    /// Centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,

    /// Declared goods value for insurance (VND)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_value: Option<i64>,
    /// Amount collected on delivery (VND)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cod_value: Option<i64>,
    /// Amount collected when delivery fails (VND)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cod_failed_amount: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
}

impl FeeRequest {
    /// True when origin is given and equals the destination district
    pub fn is_same_district(&self) -> bool {
        matches!(
            (self.from_district_id, self.to_district_id),
            (Some(from), Some(to)) if from == to
        )
    }
}

// ============================================
// Validation
// ============================================

/// One violated constraint on one request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

// ============================================
// Fee result
// ============================================

/// Fee calculation result, all amounts in VND
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,

    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub service_fee: i64,
    #[serde(default)]
    pub insurance_fee: i64,
    #[serde(default)]
    pub pick_station_fee: i64,
    #[serde(default)]
    pub coupon_value: i64,
    #[serde(default)]
    pub r2s_fee: i64,
    #[serde(default)]
    pub document_return: i64,
    #[serde(default)]
    pub double_check: i64,
    #[serde(default)]
    pub cod_fee: i64,
    #[serde(default)]
    pub pick_remote_areas_fee: i64,
    #[serde(default)]
    pub deliver_remote_areas_fee: i64,
    #[serde(default)]
    pub cod_failed_fee: i64,
}

impl FeeBreakdown {
    /// Failed result carrying field errors
    pub fn validation_failed(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors,
            ..Default::default()
        }
    }

    /// Failed result reported by the provider itself
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_request_accepts_partial_json() {
        let req: FeeRequest =
            serde_json::from_str(r#"{"to_district_id": 1442, "weight": 1000}"#).unwrap();
        assert_eq!(req.to_district_id, Some(1442));
        assert_eq!(req.weight, Some(1000));
        assert!(req.to_ward_code.is_none());
        assert!(req.coupon.is_none());
    }

    #[test]
    fn test_same_district() {
        let mut req = FeeRequest {
            to_district_id: Some(5),
            ..Default::default()
        };
        assert!(!req.is_same_district());
        req.from_district_id = Some(5);
        assert!(req.is_same_district());
        req.from_district_id = Some(6);
        assert!(!req.is_same_district());
    }

    #[test]
    fn test_breakdown_omits_empty_errors() {
        let json = serde_json::to_value(FeeBreakdown::rejected("nope")).unwrap();
        assert!(json.get("errors").is_none());
        assert_eq!(json["success"], false);
        assert_eq!(json["total"], 0);

        let json = serde_json::to_value(FeeBreakdown::validation_failed(
            "Validation failed",
            vec![FieldError::new("weight", "Weight is required")],
        ))
        .unwrap();
        assert_eq!(json["errors"][0]["field"], "weight");
    }

    #[test]
    fn test_address_units_serialize_camel_case() {
        let json = serde_json::to_value(Province::new(1, "Hà Nội", "HN")).unwrap();
        assert_eq!(json["provinceId"], 1);
        assert_eq!(json["provinceName"], "Hà Nội");

        let json = serde_json::to_value(Ward::new("1001", "Phường 1", 1)).unwrap();
        assert_eq!(json["wardCode"], "1001");
        assert_eq!(json["districtId"], 1);
    }
}
