//! Lead persistence: an append-only CSV ledger

pub mod row;
pub mod store;

pub use row::*;
pub use store::*;
