//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod already_owned;
pub mod price_band;

// Re-export for convenience
pub use already_owned::AlreadyOwnedFilter;
pub use price_band::PriceBandFilter;
