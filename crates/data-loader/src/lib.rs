//! # Data Loader Crate
//!
//! This crate handles loading and indexing the phone and user collections.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (User, Phone, OperatingSystem, Catalog)
//! - **parser**: Parse the JSON data files into Rust structs
//! - **index**: Build the catalog and validate it
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! // Load both collections
//! let catalog = Catalog::load_from_files(Path::new("data"))?;
//!
//! // Query data
//! let user = catalog.get_user(1).unwrap();
//! let phone = catalog.get_phone_by_model("Galaxy S21").unwrap();
//!
//! println!("User {} has bought {} phones", user.id, user.purchase_history.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    UserId,
    // Core types
    User,
    Phone,
    Catalog,
    // Enums
    OperatingSystem,
};
