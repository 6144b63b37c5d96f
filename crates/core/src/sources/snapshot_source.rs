//! Portfolio source backed by a JSON snapshot of the backend responses.

use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard};

use super::sources_model::PortfolioSnapshot;
use super::sources_traits::PortfolioSourceTrait;
use crate::errors::{Error, Result, SourceError};
use crate::portfolio::holdings::Holding;
use crate::portfolio::summary::{PortfolioSummary, PortfolioValuation};
use crate::session::Session;

/// Serves portfolios from a JSON document.
///
/// When built from a file the document is re-read on every listing, so each
/// refresh sees the latest contents.
pub struct JsonSnapshotSource {
    path: Option<PathBuf>,
    snapshot: RwLock<PortfolioSnapshot>,
}

impl JsonSnapshotSource {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            path: None,
            snapshot: RwLock::new(serde_json::from_str(json)?),
        })
    }

    pub fn from_snapshot(snapshot: PortfolioSnapshot) -> Self {
        Self {
            path: None,
            snapshot: RwLock::new(snapshot),
        }
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let snapshot = read_snapshot(&path).await?;
        Ok(Self {
            path: Some(path),
            snapshot: RwLock::new(snapshot),
        })
    }

    /// Copy of the snapshot as last read.
    pub fn snapshot(&self) -> Result<PortfolioSnapshot> {
        Ok(self.read_guard()?.clone())
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, PortfolioSnapshot>> {
        self.snapshot
            .read()
            .map_err(|_| Error::Unexpected("Snapshot lock poisoned".into()))
    }

    async fn reload(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let fresh = read_snapshot(path).await?;
        let mut guard = self
            .snapshot
            .write()
            .map_err(|_| Error::Unexpected("Snapshot lock poisoned".into()))?;
        *guard = fresh;
        Ok(())
    }
}

async fn read_snapshot(path: &Path) -> Result<PortfolioSnapshot> {
    let raw = tokio::fs::read_to_string(path).await?;
    let snapshot: PortfolioSnapshot = serde_json::from_str(&raw)?;
    debug!(
        "Read snapshot {} with {} portfolios",
        path.display(),
        snapshot.portfolios.len()
    );
    Ok(snapshot)
}

#[async_trait]
impl PortfolioSourceTrait for JsonSnapshotSource {
    async fn list_portfolios(&self, _session: Option<&Session>) -> Result<Vec<PortfolioSummary>> {
        self.reload()
            .await
            .map_err(|e| SourceError::ListFailed(e.to_string()))?;
        let guard = self.read_guard()?;
        Ok(guard.portfolios.clone())
    }

    async fn fetch_valuation(
        &self,
        _session: Option<&Session>,
        portfolio: &PortfolioSummary,
    ) -> Result<PortfolioValuation> {
        let guard = self.read_guard()?;
        guard
            .portfolios
            .iter()
            .find(|p| p.id == portfolio.id)
            .map(PortfolioValuation::from)
            .ok_or_else(|| SourceError::NotFound(portfolio.id.clone()).into())
    }

    async fn fetch_holdings(
        &self,
        _session: Option<&Session>,
        portfolio_id: &str,
    ) -> Result<Vec<Holding>> {
        let guard = self.read_guard()?;
        Ok(guard.holdings.get(portfolio_id).cloned().unwrap_or_default())
    }
}
