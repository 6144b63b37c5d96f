//! Client-side portfolio valuation aggregation: totals, percentages and
//! display currency for a snapshot of portfolios.

mod aggregation_model;
mod aggregation_service;

pub use aggregation_model::*;
pub use aggregation_service::*;

#[cfg(test)]
mod aggregation_service_tests;
