//! Candidate phones flowing through the filter stages.

use data_loader::{Catalog, Phone};

/// A phone under consideration for recommendation.
///
/// Candidates are generated from the full catalog and whittled down by the
/// filter stages before scoring.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub phone: Phone,
}

impl Candidate {
    pub fn new(phone: Phone) -> Self {
        Self { phone }
    }

    /// Every catalog phone as a candidate, in catalog order.
    ///
    /// Catalog order is what the ranker's stable sort falls back to on tied
    /// scores, so no reordering happens here or in the filters.
    pub fn from_catalog(catalog: &Catalog) -> Vec<Candidate> {
        catalog.phones().iter().cloned().map(Candidate::new).collect()
    }
}
