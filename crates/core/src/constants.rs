/// Decimal precision for display (percentages and amounts)
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Currency symbol used when no portfolio in the set is Euro-denominated
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Currency symbol for Euro-denominated exchanges
pub const EURO_CURRENCY_SYMBOL: &str = "€";

/// Wire tags for the supported exchanges
pub mod exchange_tags {
    pub const MANUAL: &str = "manual";
    pub const BINANCE: &str = "binance";
    pub const REVOLUTX: &str = "revolutx";
    pub const TRADING212: &str = "trading212";
}
