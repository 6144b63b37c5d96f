use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::activities::{Trade, Transfer};
use crate::portfolio::aggregation::{aggregate, AggregateTotals};
use crate::portfolio::holdings::Holding;
use crate::portfolio::summary::PortfolioSummary;
use crate::portfolio::view::PortfolioView;

/// A per-portfolio fetch that failed and was replaced by a degraded entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFailure {
    pub portfolio_id: String,
    pub message: String,
}

/// Result of one load: one entry per listed portfolio, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedPortfolios {
    pub summaries: Vec<PortfolioSummary>,
    pub failures: Vec<SourceFailure>,
}

impl LoadedPortfolios {
    pub fn totals(&self) -> AggregateTotals {
        aggregate(&self.summaries)
    }

    /// Whether every valuation was fetched.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Summaries plus the valuation view selected for each of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedViews {
    pub summaries: Vec<PortfolioSummary>,
    pub views: Vec<PortfolioView>,
    pub failures: Vec<SourceFailure>,
}

/// A snapshot of the backend responses, as stored in a JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    #[serde(default)]
    pub portfolios: Vec<PortfolioSummary>,
    #[serde(default)]
    pub holdings: HashMap<String, Vec<Holding>>,
    #[serde(default)]
    pub trades: Vec<Trade>,
    #[serde(default)]
    pub transfers: Vec<Transfer>,
}
