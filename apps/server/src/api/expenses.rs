use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use dealership_core::expenses::{Expense, ExpenseUpdate, NewExpense};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct ExpenseRangeQuery {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Query(range): Query<ExpenseRangeQuery>,
) -> ApiResult<Json<Vec<Expense>>> {
    Ok(Json(
        state.expense_service.get_expenses(range.from, range.to)?,
    ))
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(new_expense): Json<NewExpense>,
) -> ApiResult<(StatusCode, Json<Expense>)> {
    let expense = state.expense_service.create_expense(new_expense).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

async fn get_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Expense>> {
    Ok(Json(state.expense_service.get_expense(&id)?))
}

async fn update_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<ExpenseUpdate>,
) -> ApiResult<Json<Expense>> {
    update.id = Some(id);
    Ok(Json(state.expense_service.update_expense(update).await?))
}

async fn delete_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.expense_service.delete_expense(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}
