//! Storage gateway contract shared by the Postgres and in-memory stores.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::trade::{Trade, TradeId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Narrow persistence interface the trade service depends on.
#[async_trait]
pub trait TradeGateway: Send + Sync {
    /// All trades owned by `user_id`, in whatever order the store returns them.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Trade>, StoreError>;

    /// Insert when `trade.id` is `None`, otherwise overwrite (or create) the record at that id.
    async fn save(&self, trade: Trade) -> Result<Trade, StoreError>;

    /// Remove the record; absent ids are not an error.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}

/// Fresh store-assigned id.
pub(crate) fn new_trade_id() -> TradeId {
    uuid::Uuid::new_v4().to_string()
}
