//! Portfolio summaries as fetched from the backend.

mod summary_model;

pub use summary_model::*;

#[cfg(test)]
mod summary_model_tests;
