//! Settings domain models.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CURRENCY_SYMBOL, EURO_CURRENCY_SYMBOL};
use crate::errors::{Error, Result};

/// Labels used when rendering amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplaySettings {
    /// Symbol used when no portfolio in view is Euro-denominated
    pub default_currency_symbol: String,
    /// Symbol used as soon as one Euro-denominated portfolio is in view
    pub euro_currency_symbol: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            default_currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            euro_currency_symbol: EURO_CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// Partial update for display settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettingsUpdate {
    pub default_currency_symbol: Option<String>,
    pub euro_currency_symbol: Option<String>,
}

impl DisplaySettings {
    /// Applies a partial update, rejecting blank symbols.
    pub fn apply(&mut self, update: DisplaySettingsUpdate) -> Result<()> {
        if let Some(symbol) = update.default_currency_symbol {
            self.default_currency_symbol = validate_symbol("defaultCurrencySymbol", symbol)?;
        }
        if let Some(symbol) = update.euro_currency_symbol {
            self.euro_currency_symbol = validate_symbol("euroCurrencySymbol", symbol)?;
        }
        Ok(())
    }
}

fn validate_symbol(key: &str, symbol: String) -> Result<String> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidConfigValue(format!(
            "{} must not be blank",
            key
        )));
    }
    Ok(trimmed.to_string())
}
