//! User context and profile vector aggregation.
//!
//! This module gathers everything the filter and ranking stages need about a
//! user up front: the set of owned models, the income the price band derives
//! from, and the profile vector averaged over past purchases.

use crate::features::build_feature_vector;
use crate::vector::{FeatureVector, ZERO_VECTOR};
use data_loader::{Catalog, User, UserId};
use std::collections::HashSet;
use tracing::debug;

/// Aggregated view of a user, built once per recommendation call.
#[derive(Debug, Clone)]
pub struct UserContext {
    pub user_id: UserId,
    pub income: f32,
    pub age: u32,
    /// Model names from the purchase history, for O(1) ownership checks
    pub owned_models: HashSet<String>,
    /// Mean feature vector of the user's resolvable purchases
    pub profile: FeatureVector,
}

impl UserContext {
    /// Build the context for a user against a catalog.
    ///
    /// Infallible: a history that resolves to nothing simply yields the zero
    /// profile vector.
    pub fn build(user: &User, catalog: &Catalog) -> Self {
        Self {
            user_id: user.id,
            income: user.income,
            age: user.age,
            owned_models: user.purchase_history.iter().cloned().collect(),
            profile: aggregate_profile(user, catalog),
        }
    }
}

/// Average the feature vectors of the user's past purchases.
///
/// History entries are resolved against the catalog by exact model string;
/// entries that match nothing are skipped and contribute nothing to the sum.
/// The divisor is always the full history length, so unresolved entries pull
/// the mean toward zero. That bias is a load-bearing property of the scoring
/// scheme and must not be "fixed" to divide by the matched count.
///
/// An empty history divides by 1, leaving the zero vector.
pub fn aggregate_profile(user: &User, catalog: &Catalog) -> FeatureVector {
    let mut sum = ZERO_VECTOR;

    for model in &user.purchase_history {
        match catalog.get_phone_by_model(model) {
            Some(phone) => {
                let vector = build_feature_vector(phone);
                for (acc, component) in sum.iter_mut().zip(vector.iter()) {
                    *acc += component;
                }
            }
            None => {
                debug!(
                    "History entry {:?} of user {} not in catalog, skipped",
                    model, user.id
                );
            }
        }
    }

    let divisor = user.purchase_history.len().max(1) as f32;
    for component in sum.iter_mut() {
        *component /= divisor;
    }

    sum
}
