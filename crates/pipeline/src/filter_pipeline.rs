//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::candidate::Candidate;
use crate::profile::UserContext;
use crate::traits::Filter;
use anyhow::Result;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(AlreadyOwnedFilter)
///     .add_filter(PriceBandFilter::default());
///
/// let filtered = pipeline.apply(candidates, &context)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Each filter sees the survivors of the previous one; an empty result
    /// at any stage is valid and simply flows through.
    pub fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &UserContext,
    ) -> Result<Vec<Candidate>> {
        let mut current = candidates;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, context)?;
            tracing::debug!(
                "Filter {} kept {} of {} candidates",
                filter.name(),
                current.len(),
                before
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::AlreadyOwnedFilter;
    use data_loader::{Catalog, Phone, User};

    fn phone(model: &str, price: f32) -> Phone {
        Phone {
            model: model.to_string(),
            brand: "Acme".to_string(),
            price,
            screen_size: 6.0,
            storage: None,
            ram: None,
            camera: None,
            os: None,
        }
    }

    fn context(history: &[&str]) -> UserContext {
        let user = User {
            id: 1,
            income: 700.0,
            age: 28,
            purchase_history: history.iter().map(|s| s.to_string()).collect(),
        };
        UserContext::build(&user, &Catalog::new())
    }

    #[test]
    fn test_empty_pipeline_passes_everything_through() {
        let pipeline = FilterPipeline::new();
        let context = context(&[]);

        let candidates = vec![
            Candidate::new(phone("A1", 500.0)),
            Candidate::new(phone("B2", 520.0)),
        ];

        let filtered = pipeline.apply(candidates, &context).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let context = context(&["A1"]);

        let pipeline = FilterPipeline::new().add_filter(AlreadyOwnedFilter);

        let candidates = vec![
            Candidate::new(phone("A1", 500.0)),
            Candidate::new(phone("B2", 520.0)),
        ];

        let filtered = pipeline.apply(candidates, &context).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].phone.model, "B2");
    }
}
