//! HTTP request handlers for the gratuity API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_gratuity_for, service_period};
use crate::error::EngineError;
use crate::models::{GratuityStatement, NewEmployee, TenureInterval};

use super::request::{CreateEmployeeRequest, GratuityRequest, StatementQuery};
use super::response::{
    ApiError, ApiErrorResponse, GratuityResponse, HealthResponse, json_response,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/employees", get(list_employees_handler).post(create_employee_handler))
        .route("/employees/:id", get(employee_statement_handler))
        .route("/gratuity", post(gratuity_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> Response {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.store().list_all().await {
        Ok(employees) => {
            info!(
                correlation_id = %correlation_id,
                count = employees.len(),
                "Listed employees"
            );
            json_response(StatusCode::OK, employees)
        }
        Err(err) => engine_error_response(correlation_id, err, "Listing employees failed"),
    }
}

/// Handler for POST /employees.
///
/// Validates the record, stores it and returns it with its new identifier.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create employee request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let new_employee = match NewEmployee::try_from(request) {
        Ok(new) => new,
        Err(err) => return engine_error_response(correlation_id, err, "Invalid employee request"),
    };

    match state.store().insert(new_employee).await {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = employee.id,
                join_date = %employee.join_date,
                "Employee created"
            );
            json_response(StatusCode::CREATED, employee)
        }
        Err(err) => engine_error_response(correlation_id, err, "Storing employee failed"),
    }
}

/// Handler for GET /employees/:id.
///
/// Computes the employee's gratuity as of `exit_date`, or today when the
/// query string names none.
async fn employee_statement_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    query: Result<Query<StatementQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Bad employee id");
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            ))
            .into_response();
        }
    };
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Bad query string");
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            ))
            .into_response();
        }
    };

    let as_of = match query.exit_date_or(state.today()) {
        Ok(date) => date,
        Err(err) => return engine_error_response(correlation_id, err, "Invalid exit date"),
    };

    let employee = match state.store().get_by_id(id).await {
        Ok(Some(employee)) => employee,
        Ok(None) => {
            return engine_error_response(
                correlation_id,
                EngineError::EmployeeNotFound { id },
                "Employee lookup failed",
            );
        }
        Err(err) => return engine_error_response(correlation_id, err, "Employee lookup failed"),
    };

    let tenure = TenureInterval::new(employee.join_date, as_of);
    let start_time = Instant::now();
    match compute_gratuity_for(&tenure, &employee.compensation()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = employee.id,
                as_of = %as_of,
                reversed = tenure.is_reversed(),
                eligible = result.eligible,
                amount = %result.amount,
                duration_us = start_time.elapsed().as_micros(),
                "Gratuity statement computed"
            );
            json_response(
                StatusCode::OK,
                GratuityStatement {
                    service_period: service_period(&tenure),
                    employee,
                    as_of,
                    tenure,
                    result,
                },
            )
        }
        Err(err) => engine_error_response(correlation_id, err, "Gratuity calculation failed"),
    }
}

/// Handler for POST /gratuity.
///
/// Computes gratuity directly from dates and salary components, without
/// touching the employee store.
async fn gratuity_handler(payload: Result<Json<GratuityRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing gratuity request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let (tenure, compensation) = match request.into_inputs() {
        Ok(inputs) => inputs,
        Err(err) => return engine_error_response(correlation_id, err, "Invalid gratuity request"),
    };

    let start_time = Instant::now();
    match compute_gratuity_for(&tenure, &compensation) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                reversed = tenure.is_reversed(),
                eligible = result.eligible,
                qualifying_years = result.qualifying_years,
                amount = %result.amount,
                duration_us = start_time.elapsed().as_micros(),
                "Gratuity computed"
            );
            json_response(
                StatusCode::OK,
                GratuityResponse {
                    service_period: service_period(&tenure),
                    tenure,
                    result,
                },
            )
        }
        Err(err) => engine_error_response(correlation_id, err, "Gratuity calculation failed"),
    }
}

/// Logs an engine error and converts it to its HTTP response.
fn engine_error_response(correlation_id: Uuid, err: EngineError, context: &str) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "{}", context);
    ApiErrorResponse::from(err).into_response()
}

/// Maps a JSON body rejection to a `400` with a stable error code.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
    ApiErrorResponse::bad_request(error).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;
    use crate::store::InMemoryEmployeeStore;
    use axum::{body::Body, http::Request};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn create_test_state() -> AppState {
        AppState::with_fixed_date(Arc::new(InMemoryEmployeeStore::new()), today())
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_version() {
        let (status, body) = send(create_router(create_test_state()), get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_gratuity_endpoint_returns_200() {
        let body = r#"{
            "tenure_start": "2010-04-01",
            "tenure_end": "2020-04-01",
            "basic_salary": "26000",
            "dearness_allowance": "0"
        }"#;

        let response = create_router(create_test_state())
            .oneshot(post_json("/gratuity", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: GratuityResponse = serde_json::from_slice(&body).unwrap();

        assert!(result.result.eligible);
        assert_eq!(result.result.amount, Decimal::from_str("150000").unwrap());
        assert_eq!(result.service_period.years, 10);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, body) = send(
            create_router(create_test_state()),
            post_json("/gratuity", "{invalid json"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let (status, body) = send(
            create_router(create_test_state()),
            post_json(
                "/gratuity",
                r#"{"tenure_start": "2010-01-01", "basic_salary": "1", "dearness_allowance": "0"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("tenure_end"));
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/gratuity")
            .body(Body::from("{}"))
            .unwrap();
        let (status, body) = send(create_router(create_test_state()), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_create_then_view_employee() {
        let router = create_router(create_test_state());

        let (status, created) = send(
            router.clone(),
            post_json(
                "/employees",
                r#"{
                    "name": "Asha Rao",
                    "join_date": "2015-01-01",
                    "basic_salary": "20000",
                    "dearness_allowance": "6000"
                }"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let employee: Employee = serde_json::from_value(created).unwrap();
        assert_eq!(employee.id, 1);

        let (status, body) = send(router, get("/employees/1?exit_date=2020-07-01")).await;
        assert_eq!(status, StatusCode::OK);

        let statement: GratuityStatement = serde_json::from_value(body).unwrap();
        assert_eq!(statement.employee, employee);
        assert_eq!(statement.result.qualifying_years, 6);
        assert_eq!(statement.result.amount, Decimal::from_str("90000").unwrap());
    }

    #[tokio::test]
    async fn test_view_defaults_exit_date_to_today() {
        let router = create_router(create_test_state());
        send(
            router.clone(),
            post_json(
                "/employees",
                r#"{"name": "Ravi", "join_date": "2020-01-01",
                    "basic_salary": "30000", "dearness_allowance": "0"}"#,
            ),
        )
        .await;

        let (status, body) = send(router, get("/employees/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["as_of"], "2025-01-01");
        assert_eq!(body["result"]["eligible"], true);
        assert_eq!(body["result"]["qualifying_years"], 5);
    }

    #[tokio::test]
    async fn test_unknown_employee_returns_404() {
        let (status, body) = send(create_router(create_test_state()), get("/employees/42")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_non_numeric_id_returns_400() {
        let (status, body) =
            send(create_router(create_test_state()), get("/employees/abc")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}
