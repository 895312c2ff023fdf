use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use dealership_core::shareholders::{
    NewShareholder, Shareholder, ShareholderStatement, ShareholderUpdate,
};

use crate::{error::ApiResult, main_lib::AppState};

async fn list_shareholders(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Shareholder>>> {
    Ok(Json(state.shareholder_service.get_shareholders()?))
}

async fn create_shareholder(
    State(state): State<Arc<AppState>>,
    Json(new_shareholder): Json<NewShareholder>,
) -> ApiResult<(StatusCode, Json<Shareholder>)> {
    let shareholder = state
        .shareholder_service
        .create_shareholder(new_shareholder)
        .await?;
    Ok((StatusCode::CREATED, Json(shareholder)))
}

async fn get_shareholder(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Shareholder>> {
    Ok(Json(state.shareholder_service.get_shareholder(&id)?))
}

async fn update_shareholder(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<ShareholderUpdate>,
) -> ApiResult<Json<Shareholder>> {
    update.id = Some(id);
    Ok(Json(
        state.shareholder_service.update_shareholder(update).await?,
    ))
}

async fn delete_shareholder(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.shareholder_service.delete_shareholder(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_statement(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ShareholderStatement>> {
    Ok(Json(
        state.shareholder_service.get_shareholder_statement(&id)?,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/shareholders",
            get(list_shareholders).post(create_shareholder),
        )
        .route(
            "/shareholders/{id}",
            get(get_shareholder)
                .put(update_shareholder)
                .delete(delete_shareholder),
        )
        .route("/shareholders/{id}/statement", get(get_statement))
}
