//! Filter to remove phones the user already owns.
//!
//! This is the first filter in the pipeline, as there's no point in
//! recommending a model that appears in the user's purchase history.

use crate::candidate::Candidate;
use crate::profile::UserContext;
use crate::traits::Filter;
use anyhow::Result;

/// Removes candidates whose model appears in the purchase history.
///
/// ## Algorithm
/// Exact string membership against the HashSet in UserContext.owned_models.
pub struct AlreadyOwnedFilter;

impl Filter for AlreadyOwnedFilter {
    fn name(&self) -> &str {
        "AlreadyOwnedFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &UserContext) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| !context.owned_models.contains(&candidate.phone.model))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Catalog, Phone, User};

    fn phone(model: &str) -> Phone {
        Phone {
            model: model.to_string(),
            brand: "Acme".to_string(),
            price: 500.0,
            screen_size: 6.0,
            storage: None,
            ram: None,
            camera: None,
            os: None,
        }
    }

    #[test]
    fn test_already_owned_filter() {
        let user = User {
            id: 1,
            income: 700.0,
            age: 28,
            purchase_history: vec!["A1".to_string(), "C3".to_string()],
        };
        let context = UserContext::build(&user, &Catalog::new());

        let candidates = vec![
            Candidate::new(phone("A1")),
            Candidate::new(phone("B2")),
            Candidate::new(phone("C3")),
            Candidate::new(phone("D4")),
        ];

        let filter = AlreadyOwnedFilter;
        let filtered = filter.apply(candidates, &context).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].phone.model, "B2");
        assert_eq!(filtered[1].phone.model, "D4");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let user = User {
            id: 1,
            income: 700.0,
            age: 28,
            purchase_history: vec!["a1".to_string()],
        };
        let context = UserContext::build(&user, &Catalog::new());

        let filtered = AlreadyOwnedFilter
            .apply(vec![Candidate::new(phone("A1"))], &context)
            .unwrap();

        // "a1" in history does not match model "A1"
        assert_eq!(filtered.len(), 1);
    }
}
