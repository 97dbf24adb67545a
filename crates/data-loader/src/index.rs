//! Catalog building and validation.
//!
//! This module builds the `Catalog` from parsed data:
//! - Parse both input files in parallel
//! - Insert records, building the model-name index as phones arrive
//! - Validate value ranges the pipeline depends on

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::Catalog;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load the full dataset from a directory containing `users.json` and
    /// `phones.json`.
    ///
    /// This is the main entry point for loading data. Any failure here is
    /// fatal: the recommendation pipeline has nothing to work with without
    /// both collections.
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        let users_path = data_dir.join("users.json");
        let phones_path = data_dir.join("phones.json");

        // Parse the two files in parallel; `join` runs both closures and
        // returns both results.
        let (users, phones) = rayon::join(
            || parser::parse_users(&users_path),
            || parser::parse_phones(&phones_path),
        );
        let users = users?;
        let phones = phones?;

        info!("Loaded {} users and {} phones", users.len(), phones.len());

        let mut catalog = Catalog::new();

        for user in users {
            catalog.insert_user(user);
        }
        for phone in phones {
            catalog.insert_phone(phone);
        }

        catalog.validate()?;

        Ok(catalog)
    }

    /// Validate value ranges after loading.
    ///
    /// Prices and incomes must be positive: the price band is derived from
    /// income and a non-positive price can never fall inside it.
    pub fn validate(&self) -> Result<()> {
        for phone in &self.phones {
            if phone.price <= 0.0 {
                return Err(DataLoadError::InvalidValue {
                    field: format!("price ({})", phone.model),
                    value: phone.price.to_string(),
                });
            }
        }
        for user in self.users.values() {
            if user.income <= 0.0 {
                return Err(DataLoadError::InvalidValue {
                    field: format!("income (user {})", user.id),
                    value: user.income.to_string(),
                });
            }
        }
        Ok(())
    }
}
