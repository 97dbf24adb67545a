//! Pipeline for scoring phone candidates against a user profile.
//!
//! This crate provides:
//! - Feature vector construction for catalog phones
//! - Profile aggregation over a user's purchase history
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - Cosine-similarity ranking of the surviving candidates
//!
//! ## Architecture
//! The pipeline processes a user's request in stages:
//! 1. UserContext gathers the owned-model set and the mean profile vector
//! 2. Filters remove unwanted candidates (already owned, outside the price band)
//! 3. The ranker scores the survivors against the profile and sorts best-first
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Candidate, FilterPipeline, UserContext, rank_candidates};
//! use pipeline::filters::*;
//!
//! // Gather what the stages need about the user
//! let context = UserContext::build(user, &catalog);
//!
//! // Build the filter pipeline
//! let pipeline = FilterPipeline::new()
//!     .add_filter(AlreadyOwnedFilter)
//!     .add_filter(PriceBandFilter::default());
//!
//! // Filter and rank
//! let filtered = pipeline.apply(Candidate::from_catalog(&catalog), &context)?;
//! let ranked = rank_candidates(&context.profile, filtered);
//! ```

pub mod candidate;
pub mod features;
pub mod filter_pipeline;
pub mod filters;
pub mod profile;
pub mod ranker;
pub mod traits;
pub mod vector;

// Re-export main types
pub use candidate::Candidate;
pub use features::build_feature_vector;
pub use filter_pipeline::FilterPipeline;
pub use profile::{aggregate_profile, UserContext};
pub use ranker::{rank_candidates, ScoredCandidate};
pub use traits::Filter;
pub use vector::{cosine_similarity, FeatureVector, FEATURE_DIM, ZERO_VECTOR};
