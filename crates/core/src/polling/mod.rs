//! Periodic refresh loop owned by a cancellable handle.

mod poller;

pub use poller::*;
