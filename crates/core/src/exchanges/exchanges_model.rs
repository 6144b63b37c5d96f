//! Exchange tag domain model.

use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::constants::exchange_tags;

/// How a portfolio is valued on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValuationMode {
    /// Live balances only: current value and per-asset composition.
    SimpleBalance,
    /// Invested, current value and profit/loss are all tracked.
    FullTracking,
}

/// The exchange a portfolio is linked to.
///
/// On the wire this is `null` for manual portfolios or one of the exchange
/// strings. Unknown strings are read as `Manual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExchangeTag {
    #[default]
    Manual,
    Binance,
    RevolutX,
    Trading212,
}

impl ExchangeTag {
    /// Parses a wire tag. Matching is case-insensitive; anything unknown is manual.
    pub fn from_tag(tag: Option<&str>) -> Self {
        let Some(raw) = tag.map(str::trim).filter(|t| !t.is_empty()) else {
            return ExchangeTag::Manual;
        };
        match raw.to_ascii_lowercase().as_str() {
            exchange_tags::BINANCE => ExchangeTag::Binance,
            exchange_tags::REVOLUTX => ExchangeTag::RevolutX,
            exchange_tags::TRADING212 => ExchangeTag::Trading212,
            exchange_tags::MANUAL => ExchangeTag::Manual,
            other => {
                debug!("Unknown exchange tag '{}', treating as manual", other);
                ExchangeTag::Manual
            }
        }
    }

    /// Wire tag, or `None` for manual portfolios.
    pub fn as_tag(&self) -> Option<&'static str> {
        match self {
            ExchangeTag::Manual => None,
            ExchangeTag::Binance => Some(exchange_tags::BINANCE),
            ExchangeTag::RevolutX => Some(exchange_tags::REVOLUTX),
            ExchangeTag::Trading212 => Some(exchange_tags::TRADING212),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExchangeTag::Manual => "Manual",
            ExchangeTag::Binance => "Binance",
            ExchangeTag::RevolutX => "Revolut X",
            ExchangeTag::Trading212 => "Trading 212",
        }
    }

    /// Whether amounts from this exchange are Euro-denominated.
    pub fn is_euro_denominated(&self) -> bool {
        matches!(self, ExchangeTag::RevolutX | ExchangeTag::Trading212)
    }

    /// Revolut X only reports live balances; everything else is fully tracked.
    pub fn valuation_mode(&self) -> ValuationMode {
        match self {
            ExchangeTag::RevolutX => ValuationMode::SimpleBalance,
            ExchangeTag::Manual | ExchangeTag::Binance | ExchangeTag::Trading212 => {
                ValuationMode::FullTracking
            }
        }
    }
}

impl fmt::Display for ExchangeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag().unwrap_or(exchange_tags::MANUAL))
    }
}

impl Serialize for ExchangeTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_tag() {
            Some(tag) => serializer.serialize_str(tag),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for ExchangeTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(ExchangeTag::from_tag(raw.as_deref()))
    }
}
