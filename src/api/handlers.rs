//! HTTP request handlers for the congestion tax API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::request::TaxRequest;
use super::response::{ApiError, ApiErrorResponse, TaxResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/tax", post(tax_handler))
        .with_state(state)
}

/// Handler for POST /tax endpoint.
///
/// Accepts a vehicle type and one day of passages and returns the tax due.
async fn tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tax request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let (vehicle, passages) = match request.into_parts() {
        Ok(parts) => parts,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invalid tax request"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    // First use may read rule files and wait on the initialization lock
    let passage_count = passages.len();
    let task_state = state.clone();
    let start_time = Instant::now();
    let outcome = tokio::task::spawn_blocking(move || {
        task_state.calculator().assess(&vehicle, &passages)
    })
    .await;

    match outcome {
        Ok(Ok(assessment)) => {
            info!(
                correlation_id = %correlation_id,
                vehicle_type = %vehicle.vehicle_type,
                passages = passage_count,
                total = assessment.total,
                duration_us = start_time.elapsed().as_micros(),
                "Tax calculated"
            );
            let response = TaxResponse::new(
                correlation_id,
                state.calculator().city(),
                vehicle.vehicle_type,
                assessment,
            );
            json_response(StatusCode::OK, response)
        }
        Ok(Err(err)) => {
            error!(
                correlation_id = %correlation_id,
                error = %err,
                "Failed to calculate congestion tax"
            );
            ApiErrorResponse::from(err).into_response()
        }
        Err(join_error) => {
            error!(
                correlation_id = %correlation_id,
                error = %join_error,
                "Tax calculation task failed"
            );
            ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("INTERNAL_ERROR", "Tax calculation failed"),
            }
            .into_response()
        }
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};
    use std::sync::Arc;

    use super::*;
    use crate::calculation::TaxCalculator;
    use crate::config::{StaticTaxationSource, TaxationSource};
    use crate::error::{TaxError, TaxResult};
    use crate::models::{City, TaxationTimeBand, VehicleType};
    use axum::{body::Body, http::Request};
    use chrono::{Duration, NaiveDate};
    use tower::ServiceExt;

    struct UnavailableSource;

    impl TaxationSource for UnavailableSource {
        fn interval_length(&self, _city: City) -> TaxResult<Duration> {
            Err(TaxError::ConfigurationUnavailable {
                message: "connection refused".to_string(),
            })
        }

        fn free_vehicle_types(&self, _city: City) -> TaxResult<HashSet<VehicleType>> {
            Ok(HashSet::new())
        }

        fn holidays(&self) -> TaxResult<BTreeSet<NaiveDate>> {
            Ok(BTreeSet::new())
        }

        fn time_bands(&self, _city: City) -> TaxResult<Vec<TaxationTimeBand>> {
            Ok(Vec::new())
        }
    }

    fn create_test_state() -> AppState {
        AppState::new(TaxCalculator::new(
            Arc::new(StaticTaxationSource::gothenburg()),
            City::Gothenburg,
        ))
    }

    async fn post_tax(router: Router, body: String) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/tax")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_valid_request_returns_total() {
        let router = create_router(create_test_state());
        let body = r#"{
            "vehicle_type": "car",
            "passages": ["2013-02-08 06:27:00", "2013-02-08 06:35:00"]
        }"#;

        let (status, json) = post_tax(router, body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 13);
        assert_eq!(json["intervals"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, json) = post_tax(router, "{ not json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_vehicle_type_returns_validation_error() {
        let router = create_router(create_test_state());

        let (status, json) = post_tax(router, r#"{ "passages": [] }"#.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_vehicle_type_returns_400() {
        let router = create_router(create_test_state());

        let (status, json) =
            post_tax(router, r#"{ "vehicle_type": "hovercraft" }"#.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "UNKNOWN_VEHICLE_TYPE");
    }

    #[tokio::test]
    async fn test_vehicle_code_outside_byte_range_returns_400() {
        let router = create_router(create_test_state());

        let (status, json) = post_tax(router, r#"{ "vehicle_type": 256 }"#.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "UNKNOWN_VEHICLE_TYPE");
    }

    #[tokio::test]
    async fn test_error_responses_are_json() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/tax")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{ "vehicle_type": "hovercraft" }"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_unavailable_config_returns_500() {
        let state = AppState::new(TaxCalculator::new(
            Arc::new(UnavailableSource),
            City::Gothenburg,
        ));
        let router = create_router(state);

        let (status, json) = post_tax(
            router,
            r#"{ "vehicle_type": "car", "passages": ["2013-02-08 06:27:00"] }"#.to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "CONFIG_ERROR");
    }
}
