//! Display settings for the dashboard.

mod settings_model;

pub use settings_model::*;

#[cfg(test)]
mod settings_model_tests;
