//! Validation functions for series requests and lead submissions

pub mod series;
pub mod lead;

pub use series::*;
pub use lead::*;
