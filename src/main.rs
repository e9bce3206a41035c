use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trade_journal::api::routes::{AppState, app_router};
use trade_journal::config::Config;
use trade_journal::persistence::{
    MemoryTradeGateway, PgTradeGateway, TradeGateway, create_pool_and_migrate,
};
use trade_journal::service::TradeService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let gateway: Arc<dyn TradeGateway> = match &config.database_url {
        Some(url) => {
            let pool = create_pool_and_migrate(url, config.db_max_connections).await?;
            info!("connected to postgres, migrations applied");
            Arc::new(PgTradeGateway::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set, trades are kept in memory and lost on exit");
            Arc::new(MemoryTradeGateway::new())
        }
    };

    let app_state = AppState {
        trade_service: TradeService::new(gateway),
    };

    let app = app_router(app_state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("trade journal listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
