//! Folio Core - portfolio valuation for a personal crypto and stock tracker.
//!
//! Portfolios arrive from a backend with optional valuation fields. This crate
//! combines them into dashboard totals, selects a valuation view per exchange,
//! and keeps the session and refresh loop that drive those fetches. Sources
//! are abstracted behind `PortfolioSourceTrait`.

pub mod activities;
pub mod constants;
pub mod errors;
pub mod exchanges;
pub mod polling;
pub mod portfolio;
pub mod session;
pub mod settings;
pub mod sources;
pub mod utils;

// Re-export the types most callers need
pub use exchanges::{ExchangeTag, ValuationMode};
pub use portfolio::*;
pub use session::{Session, SessionContext};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
