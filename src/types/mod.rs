//! Core data types and structures

pub mod price;
pub mod lead;
pub mod commodity;

pub use price::*;
pub use lead::*;
pub use commodity::*;
