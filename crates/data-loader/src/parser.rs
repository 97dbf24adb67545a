//! Parser for the JSON data files.
//!
//! Each input file holds a single top-level JSON array of records:
//! - users.json: id, income, age, purchase_history
//! - phones.json: model, brand, price, screen_size, storage?, ram?, camera?, os?
//!
//! Optional phone fields deserialize to `None`; downstream code substitutes
//! the fixed defaults. Unrecognized OS strings are kept, not rejected.

use crate::error::{DataLoadError, Result};
use crate::types::{Phone, User};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read a file holding one JSON array of records and deserialize it.
///
/// A missing file maps to `FileNotFound`, invalid JSON to `MalformedData`
/// carrying the file name for context.
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| DataLoadError::MalformedData {
        file: path.display().to_string(),
        source: e,
    })
}

/// Parse the users.json file
pub fn parse_users(path: &Path) -> Result<Vec<User>> {
    read_records(path)
}

/// Parse the phones.json file
pub fn parse_phones(path: &Path) -> Result<Vec<Phone>> {
    read_records(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OperatingSystem;

    #[test]
    fn test_missing_file_is_not_found() {
        let result = parse_users(Path::new("/definitely/not/here/users.json"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound { .. })));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let path = std::env::temp_dir().join("phone_recs_parser_bad.json");
        fs::write(&path, "{ this is not json").unwrap();

        let result = parse_phones(&path);
        assert!(matches!(result, Err(DataLoadError::MalformedData { .. })));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_phone_optional_fields_default_to_none() {
        let json = r#"[{"model": "A1", "brand": "Acme", "price": 500.0, "screen_size": 6.0}]"#;
        let phones: Vec<Phone> = serde_json::from_str(json).unwrap();

        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].storage, None);
        assert_eq!(phones[0].ram, None);
        assert_eq!(phones[0].camera, None);
        assert_eq!(phones[0].os, None);
    }

    #[test]
    fn test_os_string_mapping_is_exact() {
        let json = r#"[
            {"model": "A", "brand": "X", "price": 1.0, "screen_size": 6.0, "os": "Android"},
            {"model": "B", "brand": "X", "price": 1.0, "screen_size": 6.0, "os": "iOS"},
            {"model": "C", "brand": "X", "price": 1.0, "screen_size": 6.0, "os": "android"},
            {"model": "D", "brand": "X", "price": 1.0, "screen_size": 6.0, "os": "KaiOS"}
        ]"#;
        let phones: Vec<Phone> = serde_json::from_str(json).unwrap();

        assert_eq!(phones[0].os, Some(OperatingSystem::Android));
        assert_eq!(phones[1].os, Some(OperatingSystem::Ios));
        // Case variants are not normalized
        assert_eq!(
            phones[2].os,
            Some(OperatingSystem::Other("android".to_string()))
        );
        assert_eq!(
            phones[3].os,
            Some(OperatingSystem::Other("KaiOS".to_string()))
        );
    }

    #[test]
    fn test_user_history_defaults_to_empty() {
        let json = r#"[{"id": 1, "income": 700.0, "age": 30}]"#;
        let users: Vec<User> = serde_json::from_str(json).unwrap();

        assert_eq!(users[0].id, 1);
        assert!(users[0].purchase_history.is_empty());
    }
}
