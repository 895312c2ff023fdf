use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use dealership_core::{
    cars::{Car, CarSale, CarStatus, CarUpdate, NewCar},
    profit_split::ProfitSplit,
};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CarListQuery {
    status: Option<CarStatus>,
    shareholder_id: Option<String>,
}

async fn list_cars(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CarListQuery>,
) -> ApiResult<Json<Vec<Car>>> {
    let cars = state
        .car_service
        .list_cars(query.status, query.shareholder_id.as_deref())?;
    Ok(Json(cars))
}

async fn create_car(
    State(state): State<Arc<AppState>>,
    Json(new_car): Json<NewCar>,
) -> ApiResult<(StatusCode, Json<Car>)> {
    let car = state.car_service.create_car(new_car).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

async fn get_car(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Car>> {
    Ok(Json(state.car_service.get_car(&id)?))
}

async fn update_car(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut car_update): Json<CarUpdate>,
) -> ApiResult<Json<Car>> {
    car_update.id = Some(id);
    let car = state.car_service.update_car(car_update).await?;
    Ok(Json(car))
}

async fn delete_car(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.car_service.delete_car(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn sell_car(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(sale): Json<CarSale>,
) -> ApiResult<Json<Car>> {
    let car = state.car_service.sell_car(&id, sale).await?;
    Ok(Json(car))
}

async fn get_car_profit_split(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ProfitSplit>> {
    Ok(Json(state.car_service.get_car_profit_split(&id)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/{id}", get(get_car).put(update_car).delete(delete_car))
        .route("/cars/{id}/sell", post(sell_car))
        .route("/cars/{id}/profit-split", get(get_car_profit_split))
}
