//! Portfolio summaries, aggregation and per-portfolio valuation views.

pub mod aggregation;
pub mod holdings;
pub mod summary;
pub mod view;

pub use aggregation::{aggregate, AggregateTotals, DashboardOverview};
pub use holdings::Holding;
pub use summary::{PortfolioSummary, PortfolioValuation};
pub use view::PortfolioView;
