//! Aggregated totals and dashboard view models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

use crate::exchanges::ExchangeTag;
use crate::portfolio::summary::PortfolioSummary;

/// Grand totals across a set of portfolios. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateTotals {
    pub total_invested: Decimal,
    pub current_value: Decimal,
    pub profit_loss: Decimal,
}

impl AggregateTotals {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Contribution of a single portfolio; missing fields count as zero.
    pub fn of(portfolio: &PortfolioSummary) -> Self {
        Self {
            total_invested: portfolio.invested_or_zero(),
            current_value: portfolio.current_value_or_zero(),
            profit_loss: portfolio.profit_loss_or_zero(),
        }
    }

    /// Profit/loss as a percentage of the invested total.
    pub fn percentage(&self) -> Decimal {
        super::profit_loss_percentage(self.profit_loss, self.total_invested)
    }
}

impl Add for AggregateTotals {
    type Output = AggregateTotals;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            total_invested: self.total_invested.saturating_add(rhs.total_invested),
            current_value: self.current_value.saturating_add(rhs.current_value),
            profit_loss: self.profit_loss.saturating_add(rhs.profit_loss),
        }
    }
}

impl Sum for AggregateTotals {
    fn sum<I: Iterator<Item = AggregateTotals>>(iter: I) -> Self {
        iter.fold(AggregateTotals::zero(), Add::add)
    }
}

impl<'a> Sum<&'a PortfolioSummary> for AggregateTotals {
    fn sum<I: Iterator<Item = &'a PortfolioSummary>>(iter: I) -> Self {
        iter.map(AggregateTotals::of).sum()
    }
}

/// One dashboard row per portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRow {
    pub id: String,
    pub name: String,
    pub exchange: ExchangeTag,
    pub total_invested: Decimal,
    pub current_value: Decimal,
    pub profit_loss: Decimal,
    /// Formatted with two decimals, e.g. "10.00"
    pub percentage: String,
}

/// Everything the dashboard cards and table need for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub totals: AggregateTotals,
    /// Aggregate percentage formatted with two decimals
    pub percentage: String,
    pub currency_symbol: String,
    pub portfolios: Vec<PortfolioRow>,
}
