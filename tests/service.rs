//! Trade service behaviour over the in-memory store: save, list, update, delete.

use std::sync::Arc;

use chrono::NaiveDate;
use trade_journal::persistence::MemoryTradeGateway;
use trade_journal::service::TradeService;
use trade_journal::types::trade::Trade;

fn fresh_service() -> TradeService {
    TradeService::new(Arc::new(MemoryTradeGateway::new()))
}

fn sample_trade(user_id: &str) -> Trade {
    Trade {
        user_id: Some(user_id.to_string()),
        date: NaiveDate::from_ymd_opt(2024, 5, 6),
        symbol: Some("AAPL".to_string()),
        action: Some("buy".to_string()),
        quantity: 10,
        price: 150.0,
        trade_type: Some("stock".to_string()),
        ..Trade::default()
    }
}

#[tokio::test]
async fn save_then_list_returns_saved_record() {
    let service = fresh_service();
    let saved = service.save_trade(sample_trade("u1")).await.unwrap();
    assert!(saved.id.as_deref().is_some_and(|id| !id.is_empty()));

    let listed = service.get_all_trades_by_user_id("u1").await.unwrap();
    assert_eq!(listed, vec![saved]);
}

#[tokio::test]
async fn list_for_user_without_trades_is_empty() {
    let service = fresh_service();
    service.save_trade(sample_trade("u1")).await.unwrap();
    assert!(service.get_all_trades_by_user_id("u2").await.unwrap().is_empty());
}

#[tokio::test]
async fn list_returns_only_that_users_trades() {
    let service = fresh_service();
    let a = service.save_trade(sample_trade("u1")).await.unwrap();
    let b = service
        .save_trade(Trade {
            symbol: Some("MSFT".to_string()),
            ..sample_trade("u1")
        })
        .await
        .unwrap();
    service.save_trade(sample_trade("u2")).await.unwrap();

    let mut ids: Vec<_> = service
        .get_all_trades_by_user_id("u1")
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    ids.sort();
    let mut expected = vec![a.id, b.id];
    expected.sort();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn update_uses_given_id_over_payload_id() {
    let service = fresh_service();
    let saved = service.save_trade(sample_trade("u1")).await.unwrap();
    let id = saved.id.clone().unwrap();

    let payload = Trade {
        id: Some("ignored".to_string()),
        action: Some("sell".to_string()),
        price: 160.0,
        ..sample_trade("u1")
    };
    let updated = service.update_trade(id.clone(), payload).await.unwrap();
    assert_eq!(updated.id.as_deref(), Some(id.as_str()));
    assert_eq!(updated.action.as_deref(), Some("sell"));

    let listed = service.get_all_trades_by_user_id("u1").await.unwrap();
    assert_eq!(listed, vec![updated]);
}

#[tokio::test]
async fn update_replaces_whole_record() {
    let service = fresh_service();
    let saved = service
        .save_trade(Trade {
            notes: Some("first entry".to_string()),
            profit: Some(12.5),
            ..sample_trade("u1")
        })
        .await
        .unwrap();

    let updated = service
        .update_trade(saved.id.clone().unwrap(), sample_trade("u1"))
        .await
        .unwrap();
    assert_eq!(updated.notes, None);
    assert_eq!(updated.profit, None);
}

#[tokio::test]
async fn update_can_move_trade_to_another_user() {
    let service = fresh_service();
    let saved = service.save_trade(sample_trade("u1")).await.unwrap();
    service
        .update_trade(saved.id.unwrap(), sample_trade("u2"))
        .await
        .unwrap();

    assert!(service.get_all_trades_by_user_id("u1").await.unwrap().is_empty());
    assert_eq!(service.get_all_trades_by_user_id("u2").await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_removes_trade_from_listing() {
    let service = fresh_service();
    let keep = service.save_trade(sample_trade("u1")).await.unwrap();
    let gone = service.save_trade(sample_trade("u1")).await.unwrap();

    service.delete_trade(gone.id.as_deref().unwrap()).await.unwrap();

    let listed = service.get_all_trades_by_user_id("u1").await.unwrap();
    assert_eq!(listed, vec![keep]);
}

#[tokio::test]
async fn delete_unknown_id_is_ok() {
    let service = fresh_service();
    service.delete_trade("does-not-exist").await.unwrap();
}

#[tokio::test]
async fn profit_is_stored_as_given() {
    let service = fresh_service();
    let saved = service
        .save_trade(Trade {
            exit_price: Some(140.0),
            profit: Some(500.0),
            profit_percentage: Some(99.0),
            ..sample_trade("u1")
        })
        .await
        .unwrap();
    assert_eq!(saved.profit, Some(500.0));
    assert_eq!(saved.profit_percentage, Some(99.0));
}
