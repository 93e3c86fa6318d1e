//! lj-state: Storage backends and authoritative collections
//!
//! Persists participants, winners, and the admin session flag as JSON
//! values in a small key-value store.

mod backend;
mod ledger;
mod session;
mod store;

pub use backend::*;
pub use ledger::*;
pub use session::*;
pub use store::*;
