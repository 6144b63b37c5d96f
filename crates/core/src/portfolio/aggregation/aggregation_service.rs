//! Portfolio valuation aggregation.
//!
//! Everything in here is pure and total: any slice of summaries, including an
//! empty one or one full of missing fields, produces a result.

use rust_decimal::{Decimal, RoundingStrategy};

use super::aggregation_model::{AggregateTotals, DashboardOverview, PortfolioRow};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::portfolio::summary::PortfolioSummary;
use crate::settings::DisplaySettings;

/// Sums invested, current value and profit/loss across portfolios.
/// Missing fields count as zero.
pub fn aggregate(portfolios: &[PortfolioSummary]) -> AggregateTotals {
    portfolios.iter().sum()
}

/// `profit_loss / total_invested * 100`, rounded to two decimals.
///
/// Without a positive invested baseline the percentage is zero, whatever the
/// profit/loss is.
pub fn profit_loss_percentage(profit_loss: Decimal, total_invested: Decimal) -> Decimal {
    if total_invested <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let ratio = profit_loss
        .checked_div(total_invested)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO);
    round_display(ratio)
}

/// Share of `part` in `total` as a percentage, rounded to two decimals.
/// Zero when the total is not positive.
pub fn share_percentage(part: Decimal, total: Decimal) -> Decimal {
    profit_loss_percentage(part, total)
}

/// Formats a percentage with exactly two decimals ("10.00", "-3.50").
pub fn format_percentage(percentage: Decimal) -> String {
    format!("{:.2}", round_display(percentage))
}

/// Convenience for `format_percentage(profit_loss_percentage(..))`.
pub fn percentage_display(profit_loss: Decimal, total_invested: Decimal) -> String {
    format_percentage(profit_loss_percentage(profit_loss, total_invested))
}

/// Formats an amount with its currency symbol, sign first ("-€20.00").
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    let rounded = round_display(amount);
    if rounded.is_sign_negative() {
        format!("-{}{:.2}", symbol, rounded.abs())
    } else {
        format!("{}{:.2}", symbol, rounded)
    }
}

/// Display symbol for a set of portfolios.
///
/// Any Euro-denominated exchange in the set switches the label to the Euro
/// symbol. Amounts are never converted, only labelled.
pub fn display_currency_symbol<'a>(
    portfolios: &[PortfolioSummary],
    settings: &'a DisplaySettings,
) -> &'a str {
    if portfolios.iter().any(|p| p.exchange.is_euro_denominated()) {
        &settings.euro_currency_symbol
    } else {
        &settings.default_currency_symbol
    }
}

impl DashboardOverview {
    /// Builds totals, percentages and rows for the given snapshot.
    pub fn build(portfolios: &[PortfolioSummary], settings: &DisplaySettings) -> Self {
        let totals = aggregate(portfolios);
        let rows = portfolios
            .iter()
            .map(|p| PortfolioRow {
                id: p.id.clone(),
                name: p.name.clone(),
                exchange: p.exchange,
                total_invested: p.invested_or_zero(),
                current_value: p.current_value_or_zero(),
                profit_loss: p.profit_loss_or_zero(),
                percentage: format_percentage(p.percentage()),
            })
            .collect();

        Self {
            totals,
            percentage: format_percentage(totals.percentage()),
            currency_symbol: display_currency_symbol(portfolios, settings).to_string(),
            portfolios: rows,
        }
    }
}

/// Rounds to display precision and folds negative zero into zero.
fn round_display(value: Decimal) -> Decimal {
    let rounded =
        value.round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}
