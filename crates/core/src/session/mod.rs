//! Authenticated session, passed explicitly to whoever needs it.
//!
//! A `SessionContext` is created once at startup from a `SessionStore`
//! (persisted session or none) and torn down on sign-out, which clears both
//! the in-memory value and the store.

mod session_context;
mod session_model;
mod session_store;

pub use session_context::*;
pub use session_model::*;
pub use session_store::*;

#[cfg(test)]
mod session_tests;
