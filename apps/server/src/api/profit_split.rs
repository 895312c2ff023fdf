//! Stateless calculator endpoints backing the sale and intake forms.

use std::sync::Arc;

use axum::{routing::post, Json, Router};
use dealership_core::profit_split::{ProfitSplit, ProfitSplitField, ProfitSplitForm};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalculateRequest {
    price: i64,
    shareholder_percentage: Option<Decimal>,
}

/// One keystroke-level edit applied on top of the current form values.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EditRequest {
    price: i64,
    shareholder_percentage: Option<Decimal>,
    field: ProfitSplitField,
    value: String,
}

async fn calculate(Json(req): Json<CalculateRequest>) -> Json<ProfitSplit> {
    Json(ProfitSplit::compute(req.price, req.shareholder_percentage))
}

async fn edit(Json(req): Json<EditRequest>) -> Json<ProfitSplit> {
    let mut form = ProfitSplitForm::new(req.price, req.shareholder_percentage);
    form.apply(req.field, &req.value);
    Json(form.into_split())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/profit-split/calculate", post(calculate))
        .route("/profit-split/edit", post(edit))
}
