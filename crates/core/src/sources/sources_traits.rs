//! Source traits.

use async_trait::async_trait;

use crate::errors::Result;
use crate::portfolio::holdings::Holding;
use crate::portfolio::summary::{PortfolioSummary, PortfolioValuation};
use crate::session::Session;

/// Where portfolio data comes from (the backend REST API in production).
///
/// Each method receives the current session, if any; authenticating the
/// request is the implementation's concern.
#[async_trait]
pub trait PortfolioSourceTrait: Send + Sync {
    /// Lists the user's portfolios.
    async fn list_portfolios(&self, session: Option<&Session>) -> Result<Vec<PortfolioSummary>>;

    /// Fetches the valuation fields for one listed portfolio.
    async fn fetch_valuation(
        &self,
        session: Option<&Session>,
        portfolio: &PortfolioSummary,
    ) -> Result<PortfolioValuation>;

    /// Fetches the holdings of one portfolio.
    async fn fetch_holdings(
        &self,
        session: Option<&Session>,
        portfolio_id: &str,
    ) -> Result<Vec<Holding>>;
}
