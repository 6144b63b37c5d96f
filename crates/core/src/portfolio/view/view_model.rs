//! Per-portfolio valuation views.
//!
//! The view variant is chosen once per portfolio from its exchange tag and
//! stays fixed until the next snapshot is built.

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::exchanges::{ExchangeTag, ValuationMode};
use crate::portfolio::aggregation::{format_percentage, share_percentage};
use crate::portfolio::holdings::{AssetComposition, Holding, HoldingPerformance};
use crate::portfolio::summary::PortfolioSummary;

/// Live-balance view: current value and per-asset composition only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleBalanceView {
    pub portfolio_id: String,
    pub name: String,
    pub exchange: ExchangeTag,
    pub current_value: Decimal,
    /// Sorted by value, largest first
    pub assets: Vec<AssetComposition>,
}

/// Fully tracked view: invested, current value and profit/loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedView {
    pub portfolio_id: String,
    pub name: String,
    pub exchange: ExchangeTag,
    pub total_invested: Decimal,
    pub current_value: Decimal,
    pub profit_loss: Decimal,
    pub percentage: String,
    pub holdings: Vec<HoldingPerformance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortfolioView {
    SimpleBalance(SimpleBalanceView),
    Tracked(TrackedView),
}

impl PortfolioView {
    /// Selects the view for a portfolio from its exchange tag.
    pub fn build(summary: &PortfolioSummary, holdings: &[Holding]) -> Self {
        match summary.valuation_mode() {
            ValuationMode::SimpleBalance => {
                PortfolioView::SimpleBalance(SimpleBalanceView::build(summary, holdings))
            }
            ValuationMode::FullTracking => {
                PortfolioView::Tracked(TrackedView::build(summary, holdings))
            }
        }
    }

    pub fn mode(&self) -> ValuationMode {
        match self {
            PortfolioView::SimpleBalance(_) => ValuationMode::SimpleBalance,
            PortfolioView::Tracked(_) => ValuationMode::FullTracking,
        }
    }

    pub fn portfolio_id(&self) -> &str {
        match self {
            PortfolioView::SimpleBalance(v) => &v.portfolio_id,
            PortfolioView::Tracked(v) => &v.portfolio_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PortfolioView::SimpleBalance(v) => &v.name,
            PortfolioView::Tracked(v) => &v.name,
        }
    }

    pub fn exchange(&self) -> ExchangeTag {
        match self {
            PortfolioView::SimpleBalance(v) => v.exchange,
            PortfolioView::Tracked(v) => v.exchange,
        }
    }

    pub fn current_value(&self) -> Decimal {
        match self {
            PortfolioView::SimpleBalance(v) => v.current_value,
            PortfolioView::Tracked(v) => v.current_value,
        }
    }

    /// `None` for balance-only portfolios, which carry no P/L.
    pub fn profit_loss(&self) -> Option<Decimal> {
        match self {
            PortfolioView::SimpleBalance(_) => None,
            PortfolioView::Tracked(v) => Some(v.profit_loss),
        }
    }

    /// `None` for balance-only portfolios.
    pub fn percentage_display(&self) -> Option<&str> {
        match self {
            PortfolioView::SimpleBalance(_) => None,
            PortfolioView::Tracked(v) => Some(&v.percentage),
        }
    }
}

impl SimpleBalanceView {
    pub fn build(summary: &PortfolioSummary, holdings: &[Holding]) -> Self {
        let held: Vec<&Holding> = holdings
            .iter()
            .filter(|h| !h.quantity_or_zero().is_zero())
            .collect();

        let priced_total = held
            .iter()
            .fold(Decimal::ZERO, |acc, h| acc.saturating_add(h.market_value()));
        // Unpriced or missing holdings fall back to the reported balance
        let current_value = if priced_total.is_zero() {
            summary.current_value_or_zero()
        } else {
            priced_total
        };

        let mut assets: Vec<AssetComposition> = held
            .into_iter()
            .map(|h| {
                let value = h.market_value();
                AssetComposition {
                    symbol: h.symbol.clone(),
                    name: h.name.clone(),
                    quantity: h.quantity_or_zero(),
                    current_price: h.current_price.unwrap_or(Decimal::ZERO),
                    value,
                    percentage_of_portfolio: share_percentage(value, current_value),
                }
            })
            .collect();

        assets.sort_by(|a, b| b.value.cmp(&a.value));

        debug!(
            "Built balance view for portfolio {} with {} assets",
            summary.id,
            assets.len()
        );

        Self {
            portfolio_id: summary.id.clone(),
            name: summary.name.clone(),
            exchange: summary.exchange,
            current_value,
            assets,
        }
    }
}

impl TrackedView {
    pub fn build(summary: &PortfolioSummary, holdings: &[Holding]) -> Self {
        let holdings = holdings
            .iter()
            .filter(|h| !h.quantity_or_zero().is_zero())
            .map(|h| {
                let cost_basis = h.cost_basis();
                let unrealized = h.unrealized_profit_loss();
                let pct = match (unrealized, cost_basis) {
                    (Some(pl), Some(cost)) => share_percentage(pl, cost),
                    _ => Decimal::ZERO,
                };
                HoldingPerformance {
                    symbol: h.symbol.clone(),
                    name: h.name.clone(),
                    quantity: h.quantity_or_zero(),
                    cost_basis,
                    market_value: h.market_value(),
                    unrealized_profit_loss: unrealized,
                    unrealized_profit_loss_pct: format_percentage(pct),
                }
            })
            .collect();

        Self {
            portfolio_id: summary.id.clone(),
            name: summary.name.clone(),
            exchange: summary.exchange,
            total_invested: summary.invested_or_zero(),
            current_value: summary.current_value_or_zero(),
            profit_loss: summary.profit_loss_or_zero(),
            percentage: format_percentage(summary.percentage()),
            holdings,
        }
    }
}
