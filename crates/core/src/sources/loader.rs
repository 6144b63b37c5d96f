//! Concurrent portfolio loading.
//!
//! One request per portfolio is issued concurrently and joined. A failed
//! request never aborts the others: its slot is filled with a degraded entry
//! (numbers absent, which aggregation reads as zero) and the failure is
//! recorded next to the results.

use futures::future::join_all;
use log::{debug, warn};
use std::sync::Arc;

use super::sources_model::{LoadedPortfolios, LoadedViews, SourceFailure};
use super::sources_traits::PortfolioSourceTrait;
use crate::errors::Result;
use crate::portfolio::summary::PortfolioSummary;
use crate::portfolio::view::PortfolioView;
use crate::session::SessionContext;

pub struct PortfolioLoader {
    source: Arc<dyn PortfolioSourceTrait>,
}

impl PortfolioLoader {
    pub fn new(source: Arc<dyn PortfolioSourceTrait>) -> Self {
        Self { source }
    }

    /// Lists portfolios and fetches every valuation concurrently.
    ///
    /// Only a failed listing is an error.
    pub async fn load(&self, session: &SessionContext) -> Result<LoadedPortfolios> {
        let current = session.current();
        let listed = self.source.list_portfolios(current).await?;
        debug!("Fetching valuations for {} portfolios", listed.len());

        let futures = listed.iter().map(|portfolio| async move {
            let result = self.source.fetch_valuation(current, portfolio).await;
            (portfolio, result)
        });
        let results = join_all(futures).await;

        let mut loaded = LoadedPortfolios::default();
        for (portfolio, result) in results {
            match result {
                Ok(valuation) => loaded.summaries.push(valuation.apply_to(portfolio)),
                Err(e) => {
                    warn!(
                        "Failed to fetch valuation for portfolio {}: {}. Using degraded entry.",
                        portfolio.id, e
                    );
                    loaded.failures.push(SourceFailure {
                        portfolio_id: portfolio.id.clone(),
                        message: e.to_string(),
                    });
                    loaded.summaries.push(portfolio.degraded());
                }
            }
        }

        Ok(loaded)
    }

    /// Like [`load`](Self::load), then fetches holdings per portfolio
    /// concurrently and selects a view for each one. A failed holdings fetch
    /// leaves that portfolio without holdings.
    pub async fn load_views(&self, session: &SessionContext) -> Result<LoadedViews> {
        let LoadedPortfolios {
            summaries,
            mut failures,
        } = self.load(session).await?;
        let current = session.current();

        let futures = summaries.iter().map(|summary| async move {
            let result = self.source.fetch_holdings(current, &summary.id).await;
            (summary, result)
        });
        let results = join_all(futures).await;

        let views = results
            .into_iter()
            .map(|(summary, result)| {
                let holdings = result.unwrap_or_else(|e| {
                    warn!(
                        "Failed to fetch holdings for portfolio {}: {}",
                        summary.id, e
                    );
                    failures.push(SourceFailure {
                        portfolio_id: summary.id.clone(),
                        message: e.to_string(),
                    });
                    Vec::new()
                });
                PortfolioView::build(summary, &holdings)
            })
            .collect();

        Ok(LoadedViews {
            summaries,
            views,
            failures,
        })
    }

    /// Fetches a single portfolio's valuation, degrading on failure.
    pub async fn refresh_one(
        &self,
        session: &SessionContext,
        portfolio: &PortfolioSummary,
    ) -> (PortfolioSummary, Option<SourceFailure>) {
        match self
            .source
            .fetch_valuation(session.current(), portfolio)
            .await
        {
            Ok(valuation) => (valuation.apply_to(portfolio), None),
            Err(e) => {
                warn!("Failed to refresh portfolio {}: {}", portfolio.id, e);
                (
                    portfolio.degraded(),
                    Some(SourceFailure {
                        portfolio_id: portfolio.id.clone(),
                        message: e.to_string(),
                    }),
                )
            }
        }
    }
}
