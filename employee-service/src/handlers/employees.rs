//! Employee CRUD handlers.
//!
//! Create failures of any kind answer 400 with an empty body; lookups and
//! deletes of unknown ids answer 404. Store failures on the other routes
//! surface as `AppError`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::AppError;
use service_core::observability::ist_now;

use crate::dtos::{EmployeeResponse, NewEmployee};
use crate::services::record_employee_operation;
use crate::startup::AppState;

pub const DELETED_MESSAGE: &str = "Employee deleted successfully";
pub const NOT_FOUND_MESSAGE: &str = "Employee not found";

/// GET /employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    tracing::info!(ist = %ist_now(), "Received GET request to /employees");

    let employees = state.employees.get_all_employees().await.map_err(|e| {
        tracing::error!(ist = %ist_now(), "Failed to list employees: {}", e);
        record_employee_operation("list", "error");
        e
    })?;

    tracing::info!(
        ist = %ist_now(),
        count = employees.len(),
        "Responding to /employees, Status: OK"
    );
    record_employee_operation("list", "ok");

    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}

/// POST /employees
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(
                ist = %ist_now(),
                "Rejected POST /employees body: {}, Status: BAD_REQUEST",
                rejection.body_text()
            );
            record_employee_operation("create", "rejected");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    tracing::info!(
        ist = %ist_now(),
        employee = ?payload,
        "Received POST request to /employees"
    );

    match state.employees.save_employee(payload).await {
        Ok(employee) => {
            tracing::info!(
                ist = %ist_now(),
                employee_id = %employee.id,
                "Successfully added employee, Status: CREATED"
            );
            record_employee_operation("create", "ok");
            (StatusCode::CREATED, Json(EmployeeResponse::from(employee))).into_response()
        }
        Err(e) => {
            tracing::error!(
                ist = %ist_now(),
                "Failed to add employee: {}, Status: BAD_REQUEST",
                e
            );
            record_employee_operation("create", "rejected");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

/// GET /employees/:id
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    tracing::info!(ist = %ist_now(), "Received GET request to /employees/{}", id);

    match state.employees.get_employee_by_id(&id).await? {
        Some(employee) => {
            tracing::info!(ist = %ist_now(), employee_id = %id, "Found employee, Status: OK");
            record_employee_operation("get", "ok");
            Ok(Json(EmployeeResponse::from(employee)).into_response())
        }
        None => {
            tracing::warn!(
                ist = %ist_now(),
                employee_id = %id,
                "Employee not found, Status: NOT_FOUND"
            );
            record_employee_operation("get", "not_found");
            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}

/// DELETE /employees/:id
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, &'static str), AppError> {
    tracing::info!(ist = %ist_now(), "Received DELETE request to /employees/{}", id);

    if state.employees.delete_employee(&id).await? {
        tracing::info!(
            ist = %ist_now(),
            employee_id = %id,
            "Successfully deleted employee, Status: OK"
        );
        record_employee_operation("delete", "ok");
        Ok((StatusCode::OK, DELETED_MESSAGE))
    } else {
        tracing::warn!(
            ist = %ist_now(),
            employee_id = %id,
            "Employee not found, Status: NOT_FOUND"
        );
        record_employee_operation("delete", "not_found");
        Ok((StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE))
    }
}
