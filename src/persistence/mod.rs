//! Storage layer: the trade gateway contract plus Postgres and in-memory backends.

mod gateway;
mod memory;
mod pool;
mod trades;

pub use gateway::{StoreError, TradeGateway};
pub use memory::MemoryTradeGateway;
pub use pool::create_pool_and_migrate;
pub use trades::PgTradeGateway;
