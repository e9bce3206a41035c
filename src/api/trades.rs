//! Trade endpoints under `/api/trades`.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::error::ApiError;
use crate::api::routes::AppState;
use crate::types::trade::Trade;

/// GET /api/trades/{userId}. Empty array when the user has no trades.
pub async fn get_trades_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Trade>>, ApiError> {
    let trades = state.trade_service.get_all_trades_by_user_id(&user_id).await?;
    tracing::debug!(%user_id, count = trades.len(), "listed trades");
    Ok(Json(trades))
}

/// POST /api/trades. The store assigns the id.
pub async fn create_trade(
    State(state): State<AppState>,
    payload: Result<Json<Trade>, JsonRejection>,
) -> Result<Json<Trade>, ApiError> {
    let Json(trade) = payload?;
    let saved = state.trade_service.save_trade(trade).await?;
    tracing::debug!(id = ?saved.id, user_id = ?saved.user_id, "created trade");
    Ok(Json(saved))
}

/// PUT /api/trades/{id}. Whole-record replace; the path id wins over any id in the body.
pub async fn update_trade(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Trade>, JsonRejection>,
) -> Result<Json<Trade>, ApiError> {
    let Json(trade) = payload?;
    let saved = state.trade_service.update_trade(id, trade).await?;
    tracing::debug!(id = ?saved.id, "updated trade");
    Ok(Json(saved))
}

/// DELETE /api/trades/{id}. Succeeds whether or not the id exists.
pub async fn delete_trade(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.trade_service.delete_trade(&id).await?;
    tracing::debug!(%id, "deleted trade");
    Ok(StatusCode::OK)
}
