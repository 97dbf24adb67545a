//! Similarity ranking of filtered candidates.
//!
//! The last pipeline stage before top-N selection: score every surviving
//! candidate against the user's profile vector and sort best-first.

use crate::candidate::Candidate;
use crate::features::build_feature_vector;
use crate::vector::{cosine_similarity, FeatureVector};
use data_loader::Phone;
use tracing::debug;

/// A candidate phone paired with its similarity score.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub phone: Phone,
    pub score: f32,
}

/// Score candidates against the profile vector and sort descending.
///
/// The score is the cosine similarity between the profile vector and each
/// candidate's feature vector; the 0.0 zero-magnitude fallback applies when
/// the profile is the zero vector, in which case every candidate ties.
///
/// The sort is stable, so tied scores keep the order the filtering stage
/// produced (catalog order).
pub fn rank_candidates(
    profile: &FeatureVector,
    candidates: Vec<Candidate>,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let vector = build_feature_vector(&candidate.phone);
            let score = cosine_similarity(profile, &vector);
            ScoredCandidate {
                phone: candidate.phone,
                score,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!("Ranked {} candidates", scored.len());
    scored
}
