//! Nexus Feed - synthetic commodity price series and a lead ledger
//!
//! Two independent services for the commodity dashboards: a seeded random-walk
//! generator producing OHLC price points for charting, and an append-only CSV
//! ledger that stores captured trade leads.

pub mod config;
pub mod types;
pub mod errors;
pub mod series;
pub mod ledger;
pub mod validation;
pub mod auth;
pub mod utils;

// Re-export commonly used items
pub use config::Config;
pub use errors::{NexusError, NexusResult};
pub use ledger::LeadLedger;
pub use series::{generate_series, generate_series_ending_at, SeriesGenerator, WalkParams};
pub use types::*;
