/// Trading212 export headers
pub mod trading212_columns {
    pub const ACTION: &str = "Action";
    pub const TIME: &str = "Time";
    pub const TICKER: &str = "Ticker";
    pub const NAME: &str = "Name";
    pub const ID: &str = "ID";
    pub const SHARES: &str = "No. of shares";
    pub const PRICE: &str = "Price / share";
    pub const TOTAL: &str = "Total";
    pub const TOTAL_CURRENCY: &str = "Currency (Total)";

    /// Per-row charges, summed into the trade fee when present
    pub const FEE_COLUMNS: [&str; 5] = [
        "Currency conversion fee",
        "Transaction fee",
        "Finra fee",
        "Stamp duty reserve tax",
        "French transaction tax",
    ];
}

/// Timestamp layouts seen in Trading212 exports
pub const TRADING212_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];
