use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::lenient_decimal_option;

/// Quantity of one asset held within a portfolio, as reported by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        with = "lenient_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<Decimal>,
    #[serde(
        default,
        with = "lenient_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub average_cost: Option<Decimal>,
    #[serde(
        default,
        with = "lenient_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_price: Option<Decimal>,
}

impl Holding {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_average_cost(mut self, average_cost: Decimal) -> Self {
        self.average_cost = Some(average_cost);
        self
    }

    pub fn with_current_price(mut self, current_price: Decimal) -> Self {
        self.current_price = Some(current_price);
        self
    }

    pub fn quantity_or_zero(&self) -> Decimal {
        self.quantity.unwrap_or(Decimal::ZERO)
    }

    /// quantity × current price; missing operands count as zero
    pub fn market_value(&self) -> Decimal {
        self.quantity_or_zero()
            .saturating_mul(self.current_price.unwrap_or(Decimal::ZERO))
    }

    /// quantity × average cost, when both are known
    pub fn cost_basis(&self) -> Option<Decimal> {
        match (self.quantity, self.average_cost) {
            (Some(quantity), Some(cost)) => Some(quantity.saturating_mul(cost)),
            _ => None,
        }
    }

    /// Market value minus cost basis, when a cost basis exists
    pub fn unrealized_profit_loss(&self) -> Option<Decimal> {
        self.cost_basis()
            .map(|cost| self.market_value().saturating_sub(cost))
    }
}

/// Per-asset line in a balance-only portfolio.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetComposition {
    pub symbol: String,
    pub name: Option<String>,
    pub quantity: Decimal,
    pub current_price: Decimal,
    pub value: Decimal,
    /// Share of the portfolio's total value (0-100)
    pub percentage_of_portfolio: Decimal,
}

/// Per-holding line in a fully tracked portfolio.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingPerformance {
    pub symbol: String,
    pub name: Option<String>,
    pub quantity: Decimal,
    pub cost_basis: Option<Decimal>,
    pub market_value: Decimal,
    pub unrealized_profit_loss: Option<Decimal>,
    /// Formatted with two decimals; "0.00" without a cost basis
    pub unrealized_profit_loss_pct: String,
}
