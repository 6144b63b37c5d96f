//! Plain-text rendering of the dashboard.

use std::fmt::Write;

use folio_core::activities::{TradeSummary, TransferSummary};
use folio_core::portfolio::aggregation::{format_money, format_percentage};
use folio_core::portfolio::{DashboardOverview, PortfolioView};
use folio_core::sources::SourceFailure;

pub fn render_overview(overview: &DashboardOverview) -> String {
    let symbol = overview.currency_symbol.as_str();
    let totals = &overview.totals;
    let mut out = String::new();

    let _ = writeln!(out, "Total invested   {}", format_money(symbol, totals.total_invested));
    let _ = writeln!(out, "Current value    {}", format_money(symbol, totals.current_value));
    let _ = writeln!(
        out,
        "Profit/loss      {} ({}%)",
        format_money(symbol, totals.profit_loss),
        overview.percentage
    );
    let _ = writeln!(out);

    for row in &overview.portfolios {
        let _ = writeln!(
            out,
            "{:<24} {:<12} {:>14} {:>14} {:>14} {:>8}%",
            row.name,
            row.exchange.display_name(),
            format_money(symbol, row.total_invested),
            format_money(symbol, row.current_value),
            format_money(symbol, row.profit_loss),
            row.percentage
        );
    }
    out
}

pub fn render_views(views: &[PortfolioView], symbol: &str) -> String {
    let mut out = String::new();
    for view in views {
        let _ = writeln!(out);
        match view {
            PortfolioView::SimpleBalance(balance) => {
                let _ = writeln!(
                    out,
                    "{} (balance) {}",
                    balance.name,
                    format_money(symbol, balance.current_value)
                );
                for asset in &balance.assets {
                    let _ = writeln!(
                        out,
                        "  {:<10} {:>16} {:>14} {:>7}%",
                        asset.symbol,
                        asset.quantity,
                        format_money(symbol, asset.value),
                        format_percentage(asset.percentage_of_portfolio)
                    );
                }
            }
            PortfolioView::Tracked(tracked) => {
                let _ = writeln!(
                    out,
                    "{} (tracked) {} {} ({}%)",
                    tracked.name,
                    format_money(symbol, tracked.current_value),
                    format_money(symbol, tracked.profit_loss),
                    tracked.percentage
                );
                for holding in &tracked.holdings {
                    let _ = writeln!(
                        out,
                        "  {:<10} {:>16} {:>14} {:>7}%",
                        holding.symbol,
                        holding.quantity,
                        format_money(symbol, holding.market_value),
                        holding.unrealized_profit_loss_pct
                    );
                }
            }
        }
    }
    out
}

pub fn render_failures(failures: &[SourceFailure]) -> String {
    let mut out = String::new();
    if failures.is_empty() {
        return out;
    }
    let _ = writeln!(out);
    for failure in failures {
        let _ = writeln!(out, "! {}: {}", failure.portfolio_id, failure.message);
    }
    out
}

pub fn render_activity(trades: &TradeSummary, transfers: &TransferSummary, symbol: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Trades     {} buys ({}), {} sells ({}), fees {}",
        trades.buy_count,
        format_money(symbol, trades.buy_volume),
        trades.sell_count,
        format_money(symbol, trades.sell_volume),
        format_money(symbol, trades.total_fees)
    );
    let _ = writeln!(
        out,
        "Transfers  in {}, out {}, net {}",
        format_money(symbol, transfers.total_deposited),
        format_money(symbol, transfers.total_withdrawn),
        format_money(symbol, transfers.net)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::exchanges::ExchangeTag;
    use folio_core::portfolio::holdings::Holding;
    use folio_core::portfolio::PortfolioSummary;
    use folio_core::settings::DisplaySettings;
    use rust_decimal_macros::dec;

    fn summaries() -> Vec<PortfolioSummary> {
        vec![
            PortfolioSummary::new("1", "Long term").with_values(
                Some(dec!(100)),
                Some(dec!(150)),
                Some(dec!(50)),
            ),
            PortfolioSummary::new("2", "Stocks")
                .with_exchange(ExchangeTag::Trading212)
                .with_values(Some(dec!(200)), Some(dec!(180)), Some(dec!(-20))),
        ]
    }

    #[test]
    fn test_overview_uses_euro_label_and_signed_amounts() {
        let overview = DashboardOverview::build(&summaries(), &DisplaySettings::default());
        let text = render_overview(&overview);

        assert!(text.contains("Total invested   €300.00"));
        assert!(text.contains("Profit/loss      €30.00 (10.00%)"));
        assert!(text.contains("-€20.00"));
        assert!(text.contains("-10.00%"));
    }

    #[test]
    fn test_views_render_both_modes() {
        let revolut = PortfolioSummary::new("3", "Crypto").with_exchange(ExchangeTag::RevolutX);
        let holdings = vec![Holding::new("BTC")
            .with_quantity(dec!(0.5))
            .with_current_price(dec!(100))];
        let views = vec![
            PortfolioView::build(&summaries()[0], &[]),
            PortfolioView::build(&revolut, &holdings),
        ];

        let text = render_views(&views, "$");
        assert!(text.contains("Long term (tracked) $150.00 $50.00 (50.00%)"));
        assert!(text.contains("Crypto (balance) $50.00"));
        assert!(text.contains("BTC"));
        assert!(text.contains(" 100.00%"));
        assert!(!text.contains(" 100%"));
    }

    #[test]
    fn test_failures_section_is_omitted_when_empty() {
        assert!(render_failures(&[]).is_empty());
        let text = render_failures(&[SourceFailure {
            portfolio_id: "9".into(),
            message: "timeout".into(),
        }]);
        assert!(text.contains("! 9: timeout"));
    }

    #[test]
    fn test_activity_totals() {
        let trades = TradeSummary {
            buy_count: 2,
            sell_count: 1,
            buy_volume: dec!(500),
            sell_volume: dec!(120.5),
            total_fees: dec!(1.25),
        };
        let transfers = TransferSummary {
            deposit_count: 1,
            withdrawal_count: 1,
            total_deposited: dec!(1000),
            total_withdrawn: dec!(250),
            net: dec!(750),
        };
        let text = render_activity(&trades, &transfers, "$");
        assert!(text.contains("2 buys ($500.00), 1 sells ($120.50), fees $1.25"));
        assert!(text.contains("in $1000.00, out $250.00, net $750.00"));
    }
}
