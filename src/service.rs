//! Trade use cases. Each call goes straight to the gateway; store errors are returned as-is.

use std::sync::Arc;

use crate::persistence::{StoreError, TradeGateway};
use crate::types::trade::{Trade, TradeId};

#[derive(Clone)]
pub struct TradeService {
    gateway: Arc<dyn TradeGateway>,
}

impl TradeService {
    pub fn new(gateway: Arc<dyn TradeGateway>) -> Self {
        Self { gateway }
    }

    pub async fn get_all_trades_by_user_id(&self, user_id: &str) -> Result<Vec<Trade>, StoreError> {
        self.gateway.find_by_user_id(user_id).await
    }

    pub async fn save_trade(&self, trade: Trade) -> Result<Trade, StoreError> {
        self.gateway.save(trade).await
    }

    /// Replace the record at `id` with `trade`. Any id in the payload is ignored; an
    /// unknown `id` results in a new record at that id.
    pub async fn update_trade(&self, id: TradeId, mut trade: Trade) -> Result<Trade, StoreError> {
        trade.id = Some(id);
        self.gateway.save(trade).await
    }

    pub async fn delete_trade(&self, id: &str) -> Result<(), StoreError> {
        self.gateway.delete_by_id(id).await
    }
}
