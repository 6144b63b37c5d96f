//! Exchange tags and the valuation mode each one implies.

mod exchanges_model;

pub use exchanges_model::*;
