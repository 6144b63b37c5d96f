//! Tests for portfolio summary parsing and derived fields.

use super::*;
use crate::exchanges::ExchangeTag;
use rust_decimal_macros::dec;
use serde_json::json;

#[test]
fn test_deserialize_full_backend_entry() {
    let summary: PortfolioSummary = serde_json::from_value(json!({
        "id": "p-1",
        "name": "Long term",
        "description": "ETFs",
        "exchange": "trading212",
        "totalInvested": 100,
        "currentValue": "150.25",
        "profitLoss": 50.25
    }))
    .unwrap();

    assert_eq!(summary.id, "p-1");
    assert_eq!(summary.description.as_deref(), Some("ETFs"));
    assert_eq!(summary.exchange, ExchangeTag::Trading212);
    assert_eq!(summary.total_invested, Some(dec!(100)));
    assert_eq!(summary.current_value, Some(dec!(150.25)));
    assert_eq!(summary.profit_loss, Some(dec!(50.25)));
}

#[test]
fn test_deserialize_balance_only_entry() {
    let summary: PortfolioSummary = serde_json::from_value(json!({
        "id": 7,
        "name": "Revolut X",
        "exchange": "revolutx",
        "currentValue": 320.5
    }))
    .unwrap();

    assert_eq!(summary.id, "7");
    assert_eq!(summary.exchange, ExchangeTag::RevolutX);
    assert_eq!(summary.total_invested, None);
    assert_eq!(summary.profit_loss, None);
    assert_eq!(summary.invested_or_zero(), dec!(0));
    assert_eq!(summary.current_value_or_zero(), dec!(320.5));
}

#[test]
fn test_missing_exchange_is_manual() {
    let summary: PortfolioSummary =
        serde_json::from_value(json!({ "id": "m", "name": "Manual", "exchange": null })).unwrap();
    assert_eq!(summary.exchange, ExchangeTag::Manual);

    let summary: PortfolioSummary =
        serde_json::from_value(json!({ "id": "m", "name": "Manual" })).unwrap();
    assert_eq!(summary.exchange, ExchangeTag::Manual);
}

#[test]
fn test_serialize_skips_absent_numbers() {
    let summary = PortfolioSummary::new("a", "A").with_values(None, Some(dec!(10)), None);
    let value = serde_json::to_value(&summary).unwrap();
    assert!(value.get("totalInvested").is_none());
    assert!(value.get("profitLoss").is_none());
    assert_eq!(value["currentValue"], json!(10.0));
}

#[test]
fn test_derived_profit_loss_only_when_both_known() {
    let both = PortfolioSummary::new("a", "A").with_values(Some(dec!(200)), Some(dec!(180)), None);
    assert_eq!(both.derived_profit_loss(), Some(dec!(-20)));
    assert_eq!(both.with_derived_profit_loss().profit_loss, Some(dec!(-20)));

    let no_baseline = PortfolioSummary::new("b", "B").with_values(None, Some(dec!(180)), None);
    assert_eq!(no_baseline.derived_profit_loss(), None);
    assert_eq!(no_baseline.with_derived_profit_loss().profit_loss, None);
}

#[test]
fn test_supplied_profit_loss_is_kept() {
    let summary = PortfolioSummary::new("a", "A")
        .with_values(Some(dec!(100)), Some(dec!(150)), Some(dec!(55)))
        .with_derived_profit_loss();
    assert_eq!(summary.profit_loss, Some(dec!(55)));
}

#[test]
fn test_degraded_clears_numbers_but_keeps_identity() {
    let summary = PortfolioSummary::new("a", "A")
        .with_exchange(ExchangeTag::Binance)
        .with_description("spot")
        .with_values(Some(dec!(1)), Some(dec!(2)), Some(dec!(1)));
    let degraded = summary.degraded();

    assert_eq!(degraded.id, "a");
    assert_eq!(degraded.exchange, ExchangeTag::Binance);
    assert_eq!(degraded.description.as_deref(), Some("spot"));
    assert_eq!(degraded.total_invested, None);
    assert_eq!(degraded.current_value, None);
    assert_eq!(degraded.profit_loss, None);
}

#[test]
fn test_percentage_guarded_without_baseline() {
    let summary = PortfolioSummary::new("a", "A").with_values(
        Some(dec!(0)),
        Some(dec!(500)),
        Some(dec!(500)),
    );
    assert_eq!(summary.percentage(), dec!(0));
}

#[test]
fn test_valuation_apply_to_derives_profit_loss() {
    let listed = PortfolioSummary::new("a", "A").with_exchange(ExchangeTag::Binance);
    let valuation = PortfolioValuation {
        total_invested: Some(dec!(100)),
        current_value: Some(dec!(130)),
        profit_loss: None,
    };
    let summary = valuation.apply_to(&listed);

    assert_eq!(summary.exchange, ExchangeTag::Binance);
    assert_eq!(summary.profit_loss, Some(dec!(30)));
}
