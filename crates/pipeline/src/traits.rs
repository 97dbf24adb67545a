//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use crate::candidate::Candidate;
use crate::profile::UserContext;
use anyhow::Result;

/// Core trait for filtering candidates.
///
/// Anything implementing this trait can be chained into a FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across concurrent callers
/// - Filters take ownership of the candidate Vec and hand back the survivors
/// - Filters must not reorder survivors: downstream tie-breaking depends on
///   catalog order flowing through unchanged
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `context` - User context containing income and ownership history
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - The surviving candidates, order preserved
    /// * `Err` - If filtering fails
    fn apply(&self, candidates: Vec<Candidate>, context: &UserContext) -> Result<Vec<Candidate>>;
}
