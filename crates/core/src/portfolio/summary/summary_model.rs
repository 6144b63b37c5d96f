//! Portfolio summary domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::exchanges::{ExchangeTag, ValuationMode};
use crate::portfolio::aggregation::profit_loss_percentage;
use crate::utils::decimal_serde::lenient_decimal_option;

/// One portfolio as reported by the backend for a single fetch.
///
/// Numeric fields are optional because their presence depends on the
/// exchange: balance-only sources never report an invested baseline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub exchange: ExchangeTag,
    #[serde(
        default,
        with = "lenient_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_invested: Option<Decimal>,
    #[serde(
        default,
        with = "lenient_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_value: Option<Decimal>,
    #[serde(
        default,
        with = "lenient_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub profit_loss: Option<Decimal>,
}

impl PortfolioSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_exchange(mut self, exchange: ExchangeTag) -> Self {
        self.exchange = exchange;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_values(
        mut self,
        total_invested: Option<Decimal>,
        current_value: Option<Decimal>,
        profit_loss: Option<Decimal>,
    ) -> Self {
        self.total_invested = total_invested;
        self.current_value = current_value;
        self.profit_loss = profit_loss;
        self
    }

    pub fn invested_or_zero(&self) -> Decimal {
        self.total_invested.unwrap_or(Decimal::ZERO)
    }

    pub fn current_value_or_zero(&self) -> Decimal {
        self.current_value.unwrap_or(Decimal::ZERO)
    }

    pub fn profit_loss_or_zero(&self) -> Decimal {
        self.profit_loss.unwrap_or(Decimal::ZERO)
    }

    /// `currentValue - totalInvested`, when both operands are known.
    pub fn derived_profit_loss(&self) -> Option<Decimal> {
        match (self.current_value, self.total_invested) {
            (Some(current), Some(invested)) => current.checked_sub(invested),
            _ => None,
        }
    }

    /// Fills `profit_loss` from the other two fields when the backend omitted it.
    /// An explicitly supplied value is kept as-is.
    pub fn with_derived_profit_loss(mut self) -> Self {
        if self.profit_loss.is_none() {
            self.profit_loss = self.derived_profit_loss();
        }
        self
    }

    /// Copy of this entry with every derived field cleared, used when its
    /// valuation could not be fetched.
    pub fn degraded(&self) -> Self {
        Self {
            total_invested: None,
            current_value: None,
            profit_loss: None,
            ..self.clone()
        }
    }

    pub fn valuation_mode(&self) -> ValuationMode {
        self.exchange.valuation_mode()
    }

    /// Profit/loss as a percentage of the invested amount (0 without a baseline).
    pub fn percentage(&self) -> Decimal {
        profit_loss_percentage(self.profit_loss_or_zero(), self.invested_or_zero())
    }
}

/// Backend ids arrive as strings or integers.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "invalid portfolio id: {}",
            other
        ))),
    }
}

/// Valuation fields returned by a per-portfolio valuation request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    #[serde(
        default,
        with = "lenient_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_invested: Option<Decimal>,
    #[serde(
        default,
        with = "lenient_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_value: Option<Decimal>,
    #[serde(
        default,
        with = "lenient_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub profit_loss: Option<Decimal>,
}

impl PortfolioValuation {
    /// Applies this valuation on top of the listed summary.
    pub fn apply_to(self, summary: &PortfolioSummary) -> PortfolioSummary {
        PortfolioSummary {
            total_invested: self.total_invested,
            current_value: self.current_value,
            profit_loss: self.profit_loss,
            ..summary.clone()
        }
        .with_derived_profit_loss()
    }
}

impl From<&PortfolioSummary> for PortfolioValuation {
    fn from(summary: &PortfolioSummary) -> Self {
        Self {
            total_invested: summary.total_invested,
            current_value: summary.current_value,
            profit_loss: summary.profit_loss,
        }
    }
}
