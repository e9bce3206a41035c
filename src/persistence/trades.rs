//! Trade persistence on Postgres: list by user, upsert, delete.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use super::gateway::{StoreError, TradeGateway, new_trade_id};
use crate::types::trade::Trade;

const TRADE_COLUMNS: &str = "id, user_id, date, symbol, action, quantity, price, type, option_type, \
     strategy, notes, exit_date, exit_price, profit, profit_percentage";

#[derive(Debug, FromRow)]
pub(crate) struct TradeRow {
    id: String,
    user_id: Option<String>,
    date: Option<NaiveDate>,
    symbol: Option<String>,
    action: Option<String>,
    quantity: i32,
    price: f64,
    #[sqlx(rename = "type")]
    trade_type: Option<String>,
    option_type: Option<String>,
    strategy: Option<String>,
    notes: Option<String>,
    exit_date: Option<NaiveDate>,
    exit_price: Option<f64>,
    profit: Option<f64>,
    profit_percentage: Option<f64>,
}

impl From<TradeRow> for Trade {
    fn from(row: TradeRow) -> Self {
        Trade {
            id: Some(row.id),
            user_id: row.user_id,
            date: row.date,
            symbol: row.symbol,
            action: row.action,
            quantity: row.quantity,
            price: row.price,
            trade_type: row.trade_type,
            option_type: row.option_type,
            strategy: row.strategy,
            notes: row.notes,
            exit_date: row.exit_date,
            exit_price: row.exit_price,
            profit: row.profit,
            profit_percentage: row.profit_percentage,
        }
    }
}

/// Gateway backed by the `trades` table.
#[derive(Clone)]
pub struct PgTradeGateway {
    pool: PgPool,
}

impl PgTradeGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TradeGateway for PgTradeGateway {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Trade>, StoreError> {
        let rows = sqlx::query_as::<_, TradeRow>(&format!(
            "SELECT {TRADE_COLUMNS} FROM trades WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Trade::from).collect())
    }

    async fn save(&self, trade: Trade) -> Result<Trade, StoreError> {
        let id = trade.id.unwrap_or_else(new_trade_id);
        let row = sqlx::query_as::<_, TradeRow>(&format!(
            "INSERT INTO trades ({TRADE_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             ON CONFLICT (id) DO UPDATE SET \
                user_id = EXCLUDED.user_id, date = EXCLUDED.date, symbol = EXCLUDED.symbol, \
                action = EXCLUDED.action, quantity = EXCLUDED.quantity, price = EXCLUDED.price, \
                type = EXCLUDED.type, option_type = EXCLUDED.option_type, \
                strategy = EXCLUDED.strategy, notes = EXCLUDED.notes, \
                exit_date = EXCLUDED.exit_date, exit_price = EXCLUDED.exit_price, \
                profit = EXCLUDED.profit, profit_percentage = EXCLUDED.profit_percentage \
             RETURNING {TRADE_COLUMNS}"
        ))
        .bind(id)
        .bind(trade.user_id)
        .bind(trade.date)
        .bind(trade.symbol)
        .bind(trade.action)
        .bind(trade.quantity)
        .bind(trade.price)
        .bind(trade.trade_type)
        .bind(trade.option_type)
        .bind(trade.strategy)
        .bind(trade.notes)
        .bind(trade.exit_date)
        .bind(trade.exit_price)
        .bind(trade.profit)
        .bind(trade.profit_percentage)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM trades WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
