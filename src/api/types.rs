//! API Request/Response Types

use serde::{Deserialize, Serialize};

/// Generic response envelope consumed by the frontend
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Failure carrying a payload (e.g. a breakdown with field errors)
    pub fn failure(data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Query for `GET /services/{toDistrictId}`
#[derive(Debug, Default, Deserialize)]
pub struct ServicesQuery {
    pub from_district_id: Option<i64>,
}
