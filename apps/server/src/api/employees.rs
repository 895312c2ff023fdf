use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use dealership_core::employees::{Employee, EmployeeUpdate, NewEmployee};

use crate::{error::ApiResult, main_lib::AppState};

async fn list_employees(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Employee>>> {
    Ok(Json(state.employee_service.get_employees()?))
}

async fn create_employee(
    State(state): State<Arc<AppState>>,
    Json(new_employee): Json<NewEmployee>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let employee = state.employee_service.create_employee(new_employee).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn get_employee(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Employee>> {
    Ok(Json(state.employee_service.get_employee(&id)?))
}

async fn update_employee(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<EmployeeUpdate>,
) -> ApiResult<Json<Employee>> {
    update.id = Some(id);
    Ok(Json(state.employee_service.update_employee(update).await?))
}

async fn delete_employee(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.employee_service.delete_employee(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}
