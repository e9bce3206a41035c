//! In-process trade store, used when no database is configured and by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::gateway::{StoreError, TradeGateway, new_trade_id};
use crate::types::trade::{Trade, TradeId};

#[derive(Default)]
pub struct MemoryTradeGateway {
    trades: RwLock<HashMap<TradeId, Trade>>,
}

impl MemoryTradeGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TradeGateway for MemoryTradeGateway {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Trade>, StoreError> {
        let guard = self.trades.read().await;
        Ok(guard
            .values()
            .filter(|t| t.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn save(&self, mut trade: Trade) -> Result<Trade, StoreError> {
        let id = trade.id.take().unwrap_or_else(new_trade_id);
        trade.id = Some(id.clone());
        self.trades.write().await.insert(id, trade.clone());
        Ok(trade)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.trades.write().await.remove(id);
        Ok(())
    }
}
