//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::store::CalculationMode;

use super::request::{CalculatePayrollRequest, UpsertDetailRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/tenants/:tenant_id/payroll/calculate",
            post(calculate_handler),
        )
        .route(
            "/tenants/:tenant_id/payroll-periods/:period_id/details/:staff_id",
            put(upsert_detail_handler),
        )
        .route(
            "/tenants/:tenant_id/payroll-periods/:period_id/details",
            get(list_details_handler),
        )
        .route(
            "/tenants/:tenant_id/payroll-periods/:period_id/finalize",
            post(finalize_handler),
        )
        .with_state(state)
}

/// Converts a JSON extraction rejection into a 400 response.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
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
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /tenants/:tenant_id/payroll/calculate.
///
/// Accepts a calculation request in either mode and returns the pay
/// breakdown without storing anything.
async fn calculate_handler(
    State(state): State<AppState>,
    Path(tenant_id): Path<String>,
    payload: Result<Json<CalculatePayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, tenant_id = %tenant_id, "Processing payroll calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let mode = match (&request.period_id, &request.total_hours) {
        (Some(period_id), None) => CalculationMode::ForPeriod {
            period_id: period_id.clone(),
        },
        (None, Some(total_hours)) => CalculationMode::ManualHours {
            total_hours: *total_hours,
        },
        (None, None) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::validation_error(
                    "either period_id or total_hours must be supplied",
                )),
            )
                .into_response();
        }
        (Some(_), Some(_)) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::validation_error(
                    "period_id and total_hours are mutually exclusive",
                )),
            )
                .into_response();
        }
    };

    match state.details().calculate(
        &tenant_id,
        &request.staff_id,
        &mode,
        request.bonus_amount,
        request.deductions_amount,
    ) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                tenant_id = %tenant_id,
                staff_id = %request.staff_id,
                take_home_pay = %breakdown.take_home_pay,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(breakdown),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                tenant_id = %tenant_id,
                staff_id = %request.staff_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for PUT /tenants/:tenant_id/payroll-periods/:period_id/details/:staff_id.
///
/// Calculates from actual attendance and stores the one detail row for the
/// key: 201 on create, 200 on in-place overwrite. A missing body means
/// zero bonus and deductions.
async fn upsert_detail_handler(
    State(state): State<AppState>,
    Path((tenant_id, period_id, staff_id)): Path<(String, String, String)>,
    payload: Result<Json<UpsertDetailRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        tenant_id = %tenant_id,
        period_id = %period_id,
        staff_id = %staff_id,
        "Processing payroll detail upsert"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => UpsertDetailRequest::default(),
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.details().upsert(
        &tenant_id,
        &period_id,
        &staff_id,
        request.bonus_amount,
        request.deductions_amount,
    ) {
        Ok(outcome) => {
            let status = if outcome.created {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(outcome.detail),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                tenant_id = %tenant_id,
                period_id = %period_id,
                staff_id = %staff_id,
                error = %err,
                "Payroll detail upsert failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for GET /tenants/:tenant_id/payroll-periods/:period_id/details.
async fn list_details_handler(
    State(state): State<AppState>,
    Path((tenant_id, period_id)): Path<(String, String)>,
) -> impl IntoResponse {
    match state.details().list(&tenant_id, &period_id) {
        Ok(details) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(details),
        )
            .into_response(),
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /tenants/:tenant_id/payroll-periods/:period_id/finalize.
///
/// Converts every stored detail into a ledger expense and locks the period
/// inside one atomic transaction.
async fn finalize_handler(
    State(state): State<AppState>,
    Path((tenant_id, period_id)): Path<(String, String)>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        tenant_id = %tenant_id,
        period_id = %period_id,
        "Processing payroll period finalization"
    );

    match state.finalizer().finalize(&tenant_id, &period_id) {
        Ok(period) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(period),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                tenant_id = %tenant_id,
                period_id = %period_id,
                error = %err,
                "Payroll period finalization failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
