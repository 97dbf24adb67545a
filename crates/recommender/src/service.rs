//! # Recommendation Service
//!
//! This module coordinates the entire recommendation pipeline:
//! 1. Look up the user
//! 2. Build the user context (owned models + profile vector)
//! 3. Generate candidates from the catalog
//! 4. Apply filters (ownership, price band)
//! 5. Rank by cosine similarity
//! 6. Return the top N recommendations

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use thiserror::Error;
use tracing::info;

use data_loader::{Catalog, UserId};
use pipeline::filters::{AlreadyOwnedFilter, PriceBandFilter};
use pipeline::{rank_candidates, Candidate, FilterPipeline, UserContext};

/// Final recommendation returned to the caller
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneRecommendation {
    pub model: String,
    pub brand: String,
    pub price: f32,
    /// Cosine similarity against the user's profile vector
    pub score: f32,
}

/// Errors a recommendation request can surface.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// Requested user identifier is absent from the user set. Reported to
    /// the caller; never a crash.
    #[error("User {0} not found")]
    UserNotFound(UserId),

    /// A pipeline stage failed
    #[error(transparent)]
    Pipeline(#[from] anyhow::Error),
}

/// Main service that coordinates the recommendation pipeline.
///
/// Holds the catalog explicitly rather than reading ambient state, so each
/// `recommend` call is a pure, reentrant computation over read-only inputs.
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    filters: FilterPipeline,
}

impl RecommendationService {
    /// Create a new service over a loaded catalog.
    ///
    /// Wires the standard filter chain: ownership exclusion first, then the
    /// income-derived price band.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let filters = FilterPipeline::new()
            .add_filter(AlreadyOwnedFilter)
            .add_filter(PriceBandFilter::default());
        Self { catalog, filters }
    }

    /// Main entry point: get up to `top_n` recommendations for a user.
    ///
    /// `top_n = 0` yields an empty list; fewer than `top_n` results are
    /// returned when the ranked list is shorter.
    pub fn recommend(
        &self,
        user_id: UserId,
        top_n: usize,
    ) -> Result<Vec<PhoneRecommendation>, RecommendError> {
        let start_time = Instant::now();

        let user = self
            .catalog
            .get_user(user_id)
            .ok_or(RecommendError::UserNotFound(user_id))?;

        let context = UserContext::build(user, &self.catalog);
        info!(
            "Built context for user {} ({} owned models)",
            user_id,
            context.owned_models.len()
        );

        let candidates = Candidate::from_catalog(&self.catalog);
        let filtered = self
            .filters
            .apply(candidates, &context)
            .context("Failed to apply filters")?;
        info!("Applied filters, candidates remaining: {}", filtered.len());

        let mut ranked = rank_candidates(&context.profile, filtered);
        ranked.truncate(top_n);
        info!(
            "Selected top {} recommendations for user {} in {:.2?}",
            ranked.len(),
            user_id,
            start_time.elapsed()
        );

        Ok(ranked
            .into_iter()
            .map(|scored| PhoneRecommendation {
                model: scored.phone.model,
                brand: scored.phone.brand,
                price: scored.phone.price,
                score: scored.score,
            })
            .collect())
    }
}
