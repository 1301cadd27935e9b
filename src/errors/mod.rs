//! Error types shared by the generator, the ledger and the access gate

pub mod nexus_error;

pub use nexus_error::*;
