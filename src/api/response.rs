//! Response types for the congestion tax API.
//!
//! This module defines the success and error response structures and the
//! mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TaxError;
use crate::models::{ChargeInterval, City, TaxAssessment, VehicleType};

/// Successful response of the `/tax` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxResponse {
    /// Identifier of this calculation, also used in log events.
    pub calculation_id: Uuid,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The city whose rules were applied.
    pub city: City,
    /// The vehicle type that was taxed.
    pub vehicle_type: VehicleType,
    /// The tax due for the day.
    pub total: u32,
    /// The tax before the daily cap.
    pub uncapped_total: u32,
    /// Charge intervals in chronological order.
    pub intervals: Vec<ChargeInterval>,
}

impl TaxResponse {
    /// Builds a response from a finished assessment.
    pub fn new(
        calculation_id: Uuid,
        city: City,
        vehicle_type: VehicleType,
        assessment: TaxAssessment,
    ) -> Self {
        Self {
            calculation_id,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            city,
            vehicle_type,
            total: assessment.total,
            uncapped_total: assessment.uncapped_total,
            intervals: assessment.intervals,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TaxError> for ApiErrorResponse {
    fn from(error: TaxError) -> Self {
        match error {
            TaxError::UnknownVehicleType { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_VEHICLE_TYPE",
                    format!("Unknown vehicle type: {}", value),
                    "Use a vehicle name such as 'car' or a code from 1 to 9",
                ),
            },
            TaxError::InvalidTimestamp { value, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIMESTAMP",
                    format!("Invalid timestamp '{}'", value),
                    format!("Expected YYYY-MM-DD HH:mm:ss ({})", message),
                ),
            },
            TaxError::ConfigNotFound { .. }
            | TaxError::ConfigParseError { .. }
            | TaxError::InvalidConfig { .. }
            | TaxError::ConfigurationUnavailable { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("CONFIG_ERROR", "Taxation rules are unavailable"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_unknown_vehicle_maps_to_bad_request() {
        let api_error: ApiErrorResponse = TaxError::UnknownVehicleType {
            value: "hovercraft".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "UNKNOWN_VEHICLE_TYPE");
        assert!(api_error.error.message.contains("hovercraft"));
    }

    #[test]
    fn test_config_errors_map_to_server_error_without_leaking_paths() {
        let api_error: ApiErrorResponse = TaxError::ConfigNotFound {
            path: "/etc/secret/holidays.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
        assert!(!api_error.error.message.contains("/etc/secret"));
        assert!(api_error.error.details.is_none());
    }

    #[test]
    fn test_tax_response_copies_assessment() {
        let response = TaxResponse::new(
            Uuid::new_v4(),
            City::Gothenburg,
            VehicleType::Car,
            TaxAssessment {
                total: 60,
                uncapped_total: 75,
                intervals: vec![],
            },
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["total"], 60);
        assert_eq!(json["uncapped_total"], 75);
        assert_eq!(json["city"], "gothenburg");
        assert_eq!(json["vehicle_type"], "car");
    }
}
