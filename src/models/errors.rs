//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code so upstream trouble is easy
//! to tell apart in logs.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - UPSTREAM_xxx: GHN communication errors
//! - API_xxx: API errors
//! - CFG_xxx: Configuration errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Upstream Errors
    // ============================================
    /// Could not connect to GHN
    UpstreamConnectionFailed,
    /// GHN did not answer in time
    UpstreamTimeout,
    /// Body was not a GHN envelope, or lacked `data`
    UpstreamInvalidResponse,
    /// GHN answered with a non-success envelope code
    UpstreamRejected,
    /// GHN answered with an HTTP 5xx status
    UpstreamServerError,

    // ============================================
    // API Errors
    // ============================================
    /// Invalid request format
    ApiBadRequest,
    /// Request failed field validation
    ApiValidationFailed,
    /// Internal server error
    ApiInternalError,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Missing GHN token
    ConfigMissingToken,
    /// Invalid configuration value
    ConfigInvalidValue,

    // ============================================
    // Generic Errors
    // ============================================
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpstreamConnectionFailed => "UPSTREAM_CONNECTION_FAILED",
            Self::UpstreamTimeout => "UPSTREAM_TIMEOUT",
            Self::UpstreamInvalidResponse => "UPSTREAM_INVALID_RESPONSE",
            Self::UpstreamRejected => "UPSTREAM_REJECTED",
            Self::UpstreamServerError => "UPSTREAM_SERVER_ERROR",

            Self::ApiBadRequest => "API_BAD_REQUEST",
            Self::ApiValidationFailed => "API_VALIDATION_FAILED",
            Self::ApiInternalError => "API_INTERNAL_ERROR",

            Self::ConfigMissingToken => "CFG_MISSING_TOKEN",
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",

            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ApiBadRequest | Self::ApiValidationFailed | Self::UpstreamRejected => 400,
            Self::UpstreamConnectionFailed
            | Self::UpstreamTimeout
            | Self::UpstreamInvalidResponse
            | Self::UpstreamServerError => 502,
            Self::ConfigMissingToken => 503,
            _ => 500,
        }
    }

    /// Whether the provider could not be used at all (triggers mock fallback)
    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(
            self,
            Self::UpstreamConnectionFailed
                | Self::UpstreamTimeout
                | Self::UpstreamInvalidResponse
                | Self::UpstreamRejected
                | Self::UpstreamServerError
                | Self::Unknown
        )
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// GHN connection failed
    pub fn upstream_connection_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamConnectionFailed, msg)
    }

    /// GHN answered with an HTTP 5xx status
    pub fn upstream_server_error(status: u16) -> Self {
        Self::new(
            ErrorCode::UpstreamServerError,
            format!("GHN answered HTTP {}", status),
        )
    }

    /// Malformed GHN response
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamInvalidResponse, msg)
    }

    /// GHN reported a non-success code
    pub fn upstream_rejected(code: i64, msg: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::UpstreamRejected,
            format!("GHN returned code {}: {}", code, msg.into()),
        )
    }

    /// Missing GHN token
    pub fn missing_token() -> Self {
        Self::new(ErrorCode::ConfigMissingToken, "GHN_API_TOKEN is not configured")
    }

    /// Invalid configuration value
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalidValue, msg)
    }

    /// API bad request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiBadRequest, msg)
    }

    /// API internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiInternalError, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::with_source(ErrorCode::UpstreamTimeout, "Request timeout", err)
        } else if err.is_connect() {
            Self::with_source(ErrorCode::UpstreamConnectionFailed, "Connection failed", err)
        } else if err.is_decode() {
            Self::with_source(ErrorCode::UpstreamInvalidResponse, "Malformed response body", err)
        } else {
            Self::new(ErrorCode::Unknown, err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::UpstreamInvalidResponse, "JSON parse error", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::new(ErrorCode::UpstreamTimeout, "GHN timed out");
        assert_eq!(err.code, ErrorCode::UpstreamTimeout);
        assert_eq!(err.code_str(), "UPSTREAM_TIMEOUT");
        assert_eq!(err.to_string(), "[UPSTREAM_TIMEOUT] GHN timed out");
    }

    #[test]
    fn test_upstream_unavailable() {
        assert!(ErrorCode::UpstreamTimeout.is_upstream_unavailable());
        assert!(ErrorCode::UpstreamInvalidResponse.is_upstream_unavailable());
        assert!(ErrorCode::UpstreamServerError.is_upstream_unavailable());
        assert!(!ErrorCode::ApiValidationFailed.is_upstream_unavailable());
        assert!(!ErrorCode::ConfigMissingToken.is_upstream_unavailable());
    }

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorCode::ApiValidationFailed.http_status(), 400);
        assert_eq!(ErrorCode::UpstreamTimeout.http_status(), 502);
        assert_eq!(AppError::upstream_server_error(503).code.http_status(), 502);
        assert_eq!(ErrorCode::ApiInternalError.http_status(), 500);
    }

    #[test]
    fn test_json_error_is_invalid_response() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::UpstreamInvalidResponse);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_rejected_message() {
        let err = AppError::upstream_rejected(400, "invalid district");
        assert!(err.message.contains("400"));
        assert!(err.message.contains("invalid district"));
    }
}
