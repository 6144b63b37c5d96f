//! Portfolio data sources and the loader that joins per-portfolio fetches.

mod loader;
mod snapshot_source;
mod sources_model;
mod sources_traits;

pub use loader::*;
pub use snapshot_source::*;
pub use sources_model::*;
pub use sources_traits::*;
