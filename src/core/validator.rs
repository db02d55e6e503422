//! Fee request validation
//!
//! Rules are independent and all evaluated; errors accumulate instead of
//! stopping at the first violation. Origin district/ward are optional
//! (GHN falls back to the shop address) and are never checked.

use crate::models::types::{FeeRequest, FieldError};
use crate::utils::constants::*;

/// Check a fee request, returning one error per violated constraint
pub fn validate(req: &FeeRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    validate_destination(req, &mut errors);
    validate_weight(req.weight, &mut errors);
    validate_service_type(req.service_type_id, &mut errors);

    validate_bounded(
        req.insurance_value,
        FIELD_INSURANCE_VALUE,
        MAX_INSURANCE_VALUE,
        ERR_INSURANCE_VALUE_NEGATIVE,
        ERR_INSURANCE_VALUE_MAX_EXCEEDED,
        &mut errors,
    );
    validate_bounded(
        req.cod_value,
        FIELD_COD_VALUE,
        MAX_COD_VALUE,
        ERR_COD_VALUE_NEGATIVE,
        ERR_COD_VALUE_MAX_EXCEEDED,
        &mut errors,
    );

    for (value, field) in [
        (req.length, FIELD_LENGTH),
        (req.width, FIELD_WIDTH),
        (req.height, FIELD_HEIGHT),
    ] {
        validate_bounded(
            value,
            field,
            MAX_DIMENSION_CM,
            ERR_DIMENSION_NEGATIVE,
            ERR_DIMENSION_MAX_EXCEEDED,
            &mut errors,
        );
    }

    errors
}

fn validate_destination(req: &FeeRequest, errors: &mut Vec<FieldError>) {
    if req.to_district_id.is_none() {
        errors.push(FieldError::new(FIELD_TO_DISTRICT_ID, ERR_TO_DISTRICT_REQUIRED));
    }

    let ward_missing = req
        .to_ward_code
        .as_deref()
        .map_or(true, |code| code.trim().is_empty());
    if ward_missing {
        errors.push(FieldError::new(FIELD_TO_WARD_CODE, ERR_TO_WARD_REQUIRED));
    }
}

fn validate_weight(weight: Option<i64>, errors: &mut Vec<FieldError>) {
    let message = match weight {
        None => ERR_WEIGHT_REQUIRED,
        Some(w) if w <= 0 => ERR_WEIGHT_INVALID,
        Some(w) if w > MAX_WEIGHT_GRAMS => ERR_WEIGHT_MAX_EXCEEDED,
        Some(_) => return,
    };
    errors.push(FieldError::new(FIELD_WEIGHT, message));
}

fn validate_service_type(service_type_id: Option<i64>, errors: &mut Vec<FieldError>) {
    if let Some(service_type) = service_type_id {
        if !(MIN_SERVICE_TYPE..=MAX_SERVICE_TYPE).contains(&service_type) {
            errors.push(FieldError::new(FIELD_SERVICE_TYPE_ID, ERR_SERVICE_TYPE_INVALID));
        }
    }
}

/// Two-sided bound `0..=max` on an optional value
fn validate_bounded(
    value: Option<i64>,
    field: &str,
    max: i64,
    negative_message: &str,
    exceeded_message: &str,
    errors: &mut Vec<FieldError>,
) {
    match value {
        Some(v) if v < 0 => errors.push(FieldError::new(field, negative_message)),
        Some(v) if v > max => errors.push(FieldError::new(field, exceeded_message)),
        _ => {}
    }
}
