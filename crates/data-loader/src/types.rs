//! Core domain types for the phone catalog.
//!
//! This module defines the records the rest of the system computes over:
//! phones, users, and the in-memory `Catalog` that indexes both.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a user
pub type UserId = u32;

// =============================================================================
// Phone-related Types
// =============================================================================

/// Operating system reported by a catalog entry.
///
/// Matching is exact: only the strings `"Android"` and `"iOS"` map to the
/// named variants. Any other value, case variants included, is preserved
/// verbatim in `Other` rather than rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OperatingSystem {
    Android,
    Ios,
    Other(String),
}

impl From<String> for OperatingSystem {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Android" => OperatingSystem::Android,
            "iOS" => OperatingSystem::Ios,
            _ => OperatingSystem::Other(s),
        }
    }
}

impl From<OperatingSystem> for String {
    fn from(os: OperatingSystem) -> Self {
        match os {
            OperatingSystem::Android => "Android".to_string(),
            OperatingSystem::Ios => "iOS".to_string(),
            OperatingSystem::Other(s) => s,
        }
    }
}

/// Represents a phone in the catalog.
///
/// `model` is the lookup key within the catalog. Storage, RAM, camera and OS
/// are optional in the source data; consumers substitute fixed defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phone {
    pub model: String,
    pub brand: String,
    pub price: f32,
    pub screen_size: f32,
    /// Storage in GB, when the catalog entry reports it
    #[serde(default)]
    pub storage: Option<f32>,
    /// RAM in GB, when the catalog entry reports it
    #[serde(default)]
    pub ram: Option<f32>,
    /// Camera resolution in MP, when the catalog entry reports it
    #[serde(default)]
    pub camera: Option<f32>,
    #[serde(default)]
    pub os: Option<OperatingSystem>,
}

// =============================================================================
// User-related Types
// =============================================================================

/// Represents a user of the recommendation system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub income: f32,
    pub age: u32,
    /// Model names of past purchases, in purchase order. May be empty, and
    /// entries are not required to resolve against the catalog.
    #[serde(default)]
    pub purchase_history: Vec<String>,
}

// =============================================================================
// Catalog - The Core In-Memory Store
// =============================================================================

/// Main data structure holding all phones and users.
///
/// Phones are stored in file order, which downstream stages rely on for
/// stable candidate ordering. The model index maps each model name to the
/// position of its first occurrence, so duplicate model names resolve to
/// the earliest entry.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) phones: Vec<Phone>,
    pub(crate) users: HashMap<UserId, User>,
    /// Model name -> index into `phones`; first occurrence wins
    pub(crate) model_index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            phones: Vec::new(),
            users: HashMap::new(),
            model_index: HashMap::new(),
        }
    }

    // Getters - these return references, the catalog keeps ownership

    /// Get a user by ID
    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Get a phone by exact model name.
    ///
    /// If the catalog contains duplicate model names, the first occurrence
    /// in file order is returned.
    pub fn get_phone_by_model(&self, model: &str) -> Option<&Phone> {
        self.model_index.get(model).map(|&idx| &self.phones[idx])
    }

    /// All phones, in the order they appeared in the source file
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    // Mutators - used during data loading

    /// Insert a user into the catalog
    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    /// Insert a phone, keeping file order and indexing its model name.
    ///
    /// The index entry is only written for the first occurrence of a model
    /// name, so later duplicates never shadow earlier ones.
    pub fn insert_phone(&mut self, phone: Phone) {
        let idx = self.phones.len();
        self.model_index.entry(phone.model.clone()).or_insert(idx);
        self.phones.push(phone);
    }

    /// Get counts for debugging/validation
    pub fn counts(&self) -> (usize, usize) {
        (self.users.len(), self.phones.len())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
