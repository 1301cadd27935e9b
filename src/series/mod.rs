//! Synthetic price series generation

pub mod params;
pub mod generator;
pub mod commodity;

pub use params::*;
pub use generator::*;
pub use commodity::*;
