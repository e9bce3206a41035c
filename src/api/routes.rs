use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::trades;
use crate::service::TradeService;

/// Shared handler state. Holds the only cross-request resource: the trade service and,
/// through it, the store.
#[derive(Clone)]
pub struct AppState {
    pub trade_service: TradeService,
}

async fn health() -> &'static str {
    "healthy"
}

pub fn app_router(state: AppState) -> Router {
    // the journal frontend is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/trades", post(trades::create_trade))
        .route(
            "/api/trades/{id}",
            get(trades::get_trades_by_user)
                .put(trades::update_trade)
                .delete(trades::delete_trade),
        )
        .layer(cors)
        .with_state(state)
}
