//! Trading212 CSV export import.
//!
//! Rows that cannot be read are collected as errors instead of failing the
//! whole import; actions other than trades and cash transfers (dividends,
//! interest, ...) are counted as skipped.

use chrono::{DateTime, NaiveDateTime, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::activities_constants::{trading212_columns as col, TRADING212_TIME_FORMATS};
use super::activities_model::{Trade, TradeSide, Transfer, TransferDirection};
use crate::errors::{Result, ValidationError};
use crate::utils::decimal_serde::parse_decimal;

/// A data row that could not be imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRowError {
    /// Zero-based index of the data row (header excluded)
    pub row_index: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedActivities {
    pub trades: Vec<Trade>,
    pub transfers: Vec<Transfer>,
    pub skipped_rows: usize,
    pub errors: Vec<ImportRowError>,
}

enum RowKind {
    Trade(TradeSide),
    Transfer(TransferDirection),
    Other,
}

fn classify(action: &str) -> RowKind {
    let action = action.trim().to_ascii_lowercase();
    if action.ends_with("buy") {
        RowKind::Trade(TradeSide::Buy)
    } else if action.ends_with("sell") {
        RowKind::Trade(TradeSide::Sell)
    } else if action == "deposit" {
        RowKind::Transfer(TransferDirection::Deposit)
    } else if action == "withdrawal" {
        RowKind::Transfer(TransferDirection::Withdrawal)
    } else {
        RowKind::Other
    }
}

fn column<'r>(
    record: &'r StringRecord,
    index: &HashMap<String, usize>,
    name: &str,
) -> Option<&'r str> {
    index
        .get(name)
        .and_then(|&i| record.get(i))
        .filter(|v| !v.is_empty())
}

fn parse_time(raw: &str) -> Option<DateTime<Utc>> {
    TRADING212_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Imports trades and cash transfers from a Trading212 CSV export into the
/// given portfolio.
pub fn import_trading212_csv(content: &[u8], portfolio_id: &str) -> Result<ImportedActivities> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content);

    let headers = reader
        .headers()
        .map_err(|e| ValidationError::InvalidInput(format!("Unreadable CSV header: {}", e)))?
        .clone();
    let index: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim_start_matches('\u{feff}').to_string(), i))
        .collect();

    if !index.contains_key(col::ACTION) {
        return Err(ValidationError::MissingField(col::ACTION.to_string()).into());
    }

    let mut imported = ImportedActivities::default();

    for (row_index, record) in reader.records().enumerate() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                imported.errors.push(ImportRowError {
                    row_index,
                    message: e.to_string(),
                });
                continue;
            }
        };

        let action = column(&record, &index, col::ACTION).unwrap_or_default();
        let id = column(&record, &index, col::ID)
            .map(str::to_string)
            .unwrap_or_else(|| format!("t212-{}", row_index + 1));
        let timestamp = column(&record, &index, col::TIME).and_then(parse_time);

        match classify(action) {
            RowKind::Trade(side) => {
                let Some(symbol) = column(&record, &index, col::TICKER) else {
                    imported.errors.push(ImportRowError {
                        row_index,
                        message: format!("'{}' row without a ticker", action),
                    });
                    continue;
                };

                let fees: Vec<Decimal> = col::FEE_COLUMNS
                    .iter()
                    .filter_map(|name| column(&record, &index, name).and_then(parse_decimal))
                    .collect();
                let fee = if fees.is_empty() {
                    None
                } else {
                    Some(fees.iter().map(|f| f.abs()).sum::<Decimal>())
                };

                imported.trades.push(Trade {
                    id,
                    portfolio_id: portfolio_id.to_string(),
                    symbol: symbol.to_string(),
                    side,
                    quantity: column(&record, &index, col::SHARES).and_then(parse_decimal),
                    price: column(&record, &index, col::PRICE).and_then(parse_decimal),
                    fee,
                    executed_at: timestamp,
                });
            }
            RowKind::Transfer(direction) => {
                let asset = column(&record, &index, col::TOTAL_CURRENCY).unwrap_or("CASH");
                imported.transfers.push(Transfer {
                    id,
                    portfolio_id: portfolio_id.to_string(),
                    asset: asset.to_string(),
                    direction,
                    amount: column(&record, &index, col::TOTAL)
                        .and_then(parse_decimal)
                        .map(|a| a.abs()),
                    occurred_at: timestamp,
                });
            }
            RowKind::Other => {
                debug!("Skipping Trading212 row {} with action '{}'", row_index, action);
                imported.skipped_rows += 1;
            }
        }
    }

    if !imported.errors.is_empty() {
        warn!(
            "Trading212 import for portfolio {} finished with {} row errors",
            portfolio_id,
            imported.errors.len()
        );
    }

    Ok(imported)
}
