//! Filter restricting candidates to an income-derived price band.
//!
//! Keeps the recommendation list affordable but not trivially cheap relative
//! to what the user earns.

use crate::candidate::Candidate;
use crate::profile::UserContext;
use crate::traits::Filter;
use anyhow::Result;

/// Keeps candidates whose price lies inside the income-derived band.
///
/// ## Algorithm
/// The band is `[income * lower_ratio, income * upper_ratio]`, inclusive on
/// both ends. A price exactly on either bound survives.
pub struct PriceBandFilter {
    lower_ratio: f32,
    upper_ratio: f32,
}

impl PriceBandFilter {
    /// Lower band bound as a fraction of income (30% below)
    pub const DEFAULT_LOWER_RATIO: f32 = 0.7;

    /// Upper band bound as a fraction of income (50% above)
    pub const DEFAULT_UPPER_RATIO: f32 = 1.5;

    /// Create a filter with explicit band ratios.
    pub fn new(lower_ratio: f32, upper_ratio: f32) -> Self {
        Self {
            lower_ratio,
            upper_ratio,
        }
    }

    /// The inclusive price band for a given income.
    pub fn band(&self, income: f32) -> (f32, f32) {
        (income * self.lower_ratio, income * self.upper_ratio)
    }
}

impl Default for PriceBandFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOWER_RATIO, Self::DEFAULT_UPPER_RATIO)
    }
}

impl Filter for PriceBandFilter {
    fn name(&self) -> &str {
        "PriceBandFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &UserContext) -> Result<Vec<Candidate>> {
        let (min_price, max_price) = self.band(context.income);

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                candidate.phone.price >= min_price && candidate.phone.price <= max_price
            })
            .collect();
        Ok(filtered)
    }
}
