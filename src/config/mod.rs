//! Configuration management for the feed and the ledger

pub mod settings;

pub use settings::*;
