use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use dealership_core::reports::{MonthlyProfit, SoldCarsReport};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct ReportRangeQuery {
    from: NaiveDate,
    to: NaiveDate,
}

async fn monthly_profit(
    State(state): State<Arc<AppState>>,
    Query(range): Query<ReportRangeQuery>,
) -> ApiResult<Json<Vec<MonthlyProfit>>> {
    Ok(Json(
        state.report_service.get_monthly_profit(range.from, range.to)?,
    ))
}

async fn sold_cars(
    State(state): State<Arc<AppState>>,
    Query(range): Query<ReportRangeQuery>,
) -> ApiResult<Json<SoldCarsReport>> {
    Ok(Json(
        state
            .report_service
            .get_sold_cars_report(range.from, range.to)?,
    ))
}

async fn export_sold_cars(
    State(state): State<Arc<AppState>>,
    Query(range): Query<ReportRangeQuery>,
) -> ApiResult<impl IntoResponse> {
    let csv = state
        .report_service
        .export_sold_cars_csv(range.from, range.to)?;
    let disposition = format!(
        "attachment; filename=\"sold-cars-{}-{}.csv\"",
        range.from, range.to
    );
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reports/monthly-profit", get(monthly_profit))
        .route("/reports/sold-cars", get(sold_cars))
        .route("/reports/sold-cars/export", get(export_sold_cars))
}
