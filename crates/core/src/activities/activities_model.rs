//! Trade and transfer domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::lenient_decimal_option;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// A buy/sell execution record affecting a portfolio's holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub portfolio_id: String,
    pub symbol: String,
    pub side: TradeSide,
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
    pub price: Option<Decimal>,
    #[serde(
        default,
        with = "lenient_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executed_at: Option<DateTime<Utc>>,
}

impl Trade {
    /// quantity × price; missing operands count as zero
    pub fn notional(&self) -> Decimal {
        self.quantity
            .unwrap_or(Decimal::ZERO)
            .saturating_mul(self.price.unwrap_or(Decimal::ZERO))
            .abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferDirection {
    Deposit,
    Withdrawal,
}

/// A deposit or withdrawal of an asset, distinct from a trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: String,
    pub portfolio_id: String,
    pub asset: String,
    pub direction: TransferDirection,
    #[serde(
        default,
        with = "lenient_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<DateTime<Utc>>,
}

/// Totals for the trades table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSummary {
    pub buy_count: usize,
    pub sell_count: usize,
    pub buy_volume: Decimal,
    pub sell_volume: Decimal,
    pub total_fees: Decimal,
}

/// Totals for the transfers table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferSummary {
    pub deposit_count: usize,
    pub withdrawal_count: usize,
    pub total_deposited: Decimal,
    pub total_withdrawn: Decimal,
    /// deposited - withdrawn
    pub net: Decimal,
}
