//! Trades and transfers: models, table summaries and CSV import.

mod activities_constants;
mod activities_model;
mod activities_summary;
mod csv_import;



pub use activities_constants::*;
pub use activities_model::*;
pub use activities_summary::*;
pub use csv_import::{import_trading212_csv, ImportRowError, ImportedActivities};
