//! Unit tests for portfolio aggregation.

use super::*;
use crate::exchanges::ExchangeTag;
use crate::portfolio::summary::PortfolioSummary;
use crate::settings::DisplaySettings;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn tracked(id: &str, invested: Decimal, value: Decimal, pl: Decimal) -> PortfolioSummary {
    PortfolioSummary::new(id, id).with_values(Some(invested), Some(value), Some(pl))
}

// ==================== aggregate ====================

#[test]
fn test_aggregate_empty_is_zero() {
    let totals = aggregate(&[]);
    assert_eq!(totals, AggregateTotals::zero());
    assert_eq!(totals.total_invested, dec!(0));
    assert_eq!(totals.current_value, dec!(0));
    assert_eq!(totals.profit_loss, dec!(0));
}

#[test]
fn test_aggregate_two_tracked_portfolios() {
    let portfolios = vec![
        tracked("a", dec!(100), dec!(150), dec!(50)),
        tracked("b", dec!(200), dec!(180), dec!(-20)),
    ];

    let totals = aggregate(&portfolios);

    assert_eq!(totals.total_invested, dec!(300));
    assert_eq!(totals.current_value, dec!(330));
    assert_eq!(totals.profit_loss, dec!(30));
    assert_eq!(format_percentage(totals.percentage()), "10.00");
}

#[test]
fn test_aggregate_balance_only_portfolio_contributes_current_value() {
    let portfolios = vec![
        tracked("a", dec!(100), dec!(150), dec!(50)),
        PortfolioSummary::new("rx", "Revolut X")
            .with_exchange(ExchangeTag::RevolutX)
            .with_values(None, Some(dec!(75.5)), None),
    ];

    let totals = aggregate(&portfolios);

    assert_eq!(totals.total_invested, dec!(100));
    assert_eq!(totals.current_value, dec!(225.5));
    assert_eq!(totals.profit_loss, dec!(50));
}

#[test]
fn test_aggregate_all_fields_missing() {
    let portfolios = vec![PortfolioSummary::new("x", "X"), PortfolioSummary::new("y", "Y")];
    assert_eq!(aggregate(&portfolios), AggregateTotals::zero());
}

#[test]
fn test_aggregate_concat_with_empty_is_unchanged() {
    let portfolios = vec![
        tracked("a", dec!(10.5), dec!(12), dec!(1.5)),
        tracked("b", dec!(3), dec!(1), dec!(-2)),
    ];
    let mut extended = portfolios.clone();
    extended.extend(Vec::<PortfolioSummary>::new());

    assert_eq!(aggregate(&portfolios), aggregate(&extended));
}

#[test]
fn test_totals_add_matches_concatenation() {
    let left = vec![tracked("a", dec!(10), dec!(11), dec!(1))];
    let right = vec![tracked("b", dec!(5), dec!(4), dec!(-1))];
    let all: Vec<_> = left.iter().chain(right.iter()).cloned().collect();

    assert_eq!(aggregate(&left) + aggregate(&right), aggregate(&all));
}

// ==================== percentage ====================

#[test]
fn test_percentage_zero_invested_is_zero() {
    assert_eq!(percentage_display(dec!(500), dec!(0)), "0.00");
    assert_eq!(percentage_display(dec!(-500), dec!(0)), "0.00");
    assert_eq!(percentage_display(dec!(0), dec!(0)), "0.00");
}

#[test]
fn test_percentage_negative_invested_is_zero() {
    assert_eq!(profit_loss_percentage(dec!(10), dec!(-100)), dec!(0));
}

#[test]
fn test_single_portfolio_without_baseline_is_guarded() {
    let portfolios = vec![tracked("a", dec!(0), dec!(500), dec!(500))];
    let totals = aggregate(&portfolios);
    assert_eq!(format_percentage(totals.percentage()), "0.00");
}

#[test]
fn test_percentage_rounding_and_formatting() {
    assert_eq!(percentage_display(dec!(1), dec!(3)), "33.33");
    assert_eq!(percentage_display(dec!(2), dec!(3)), "66.67");
    assert_eq!(percentage_display(dec!(-20), dec!(200)), "-10.00");
    assert_eq!(percentage_display(dec!(0.00001), dec!(100)), "0.00");
    assert_eq!(percentage_display(dec!(-0.00001), dec!(100)), "0.00");
}

#[test]
fn test_format_money() {
    assert_eq!(format_money("$", dec!(330)), "$330.00");
    assert_eq!(format_money("€", dec!(-20.456)), "-€20.46");
    assert_eq!(format_money("$", dec!(-0.001)), "$0.00");
}

// ==================== currency ====================

#[test]
fn test_display_currency_defaults_to_dollar() {
    let settings = DisplaySettings::default();
    let portfolios = vec![
        PortfolioSummary::new("a", "A").with_exchange(ExchangeTag::Binance),
        PortfolioSummary::new("b", "B"),
    ];
    assert_eq!(display_currency_symbol(&portfolios, &settings), "$");
    assert_eq!(display_currency_symbol(&[], &settings), "$");
}

#[test]
fn test_display_currency_any_euro_exchange_switches_to_euro() {
    let settings = DisplaySettings::default();
    for tag in [ExchangeTag::RevolutX, ExchangeTag::Trading212] {
        let portfolios = vec![
            PortfolioSummary::new("a", "A").with_exchange(ExchangeTag::Binance),
            PortfolioSummary::new("b", "B").with_exchange(tag),
        ];
        assert_eq!(display_currency_symbol(&portfolios, &settings), "€");
    }
}

#[test]
fn test_display_currency_does_not_convert_amounts() {
    let settings = DisplaySettings::default();
    let portfolios = vec![
        tracked("a", dec!(100), dec!(150), dec!(50)),
        PortfolioSummary::new("b", "B")
            .with_exchange(ExchangeTag::Trading212)
            .with_values(Some(dec!(100)), Some(dec!(90)), Some(dec!(-10))),
    ];
    let overview = DashboardOverview::build(&portfolios, &settings);
    assert_eq!(overview.currency_symbol, "€");
    assert_eq!(overview.totals.current_value, dec!(240));
}

// ==================== dashboard ====================

#[test]
fn test_dashboard_overview_rows() {
    let settings = DisplaySettings::default();
    let portfolios = vec![
        tracked("a", dec!(100), dec!(150), dec!(50)),
        tracked("b", dec!(200), dec!(180), dec!(-20)),
        PortfolioSummary::new("c", "Broken"),
    ];

    let overview = DashboardOverview::build(&portfolios, &settings);

    assert_eq!(overview.percentage, "10.00");
    assert_eq!(overview.currency_symbol, "$");
    assert_eq!(overview.portfolios.len(), 3);
    assert_eq!(overview.portfolios[0].percentage, "50.00");
    assert_eq!(overview.portfolios[1].percentage, "-10.00");
    assert_eq!(overview.portfolios[2].percentage, "0.00");
    assert_eq!(overview.portfolios[2].current_value, dec!(0));
}

#[test]
fn test_dashboard_overview_serializes_camel_case() {
    let overview = DashboardOverview::build(&[], &DisplaySettings::default());
    let value = serde_json::to_value(&overview).unwrap();
    assert!(value.get("currencySymbol").is_some());
    assert!(value["totals"].get("totalInvested").is_some());
    assert!(value["totals"].get("currentValue").is_some());
    assert!(value["totals"].get("profitLoss").is_some());
}
