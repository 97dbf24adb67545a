//! Feature vector construction for catalog phones.
//!
//! This module maps a phone record to the fixed 7-component encoding used
//! everywhere downstream: profile aggregation and similarity scoring.

use crate::vector::FeatureVector;
use data_loader::{OperatingSystem, Phone};

/// Storage in GB assumed when a catalog entry omits it
pub const DEFAULT_STORAGE_GB: f32 = 64.0;

/// RAM in GB assumed when a catalog entry omits it
pub const DEFAULT_RAM_GB: f32 = 4.0;

/// Camera resolution in MP assumed when a catalog entry omits it
pub const DEFAULT_CAMERA_MP: f32 = 12.0;

/// Build the feature vector for a phone.
///
/// Layout: `[price, screen_size, storage, ram, camera, os_is_android, os_is_ios]`.
///
/// Numeric components are taken as-is with no normalization or scaling;
/// absent optional fields substitute the fixed defaults. The OS pair is a
/// one-hot encoding with `[0, 0]` for anything that is not exactly Android
/// or iOS, absence included. This function has no error conditions.
pub fn build_feature_vector(phone: &Phone) -> FeatureVector {
    let (os_is_android, os_is_ios) = os_one_hot(phone.os.as_ref());

    [
        phone.price,
        phone.screen_size,
        phone.storage.unwrap_or(DEFAULT_STORAGE_GB),
        phone.ram.unwrap_or(DEFAULT_RAM_GB),
        phone.camera.unwrap_or(DEFAULT_CAMERA_MP),
        os_is_android,
        os_is_ios,
    ]
}

/// One-hot pair for the OS components
fn os_one_hot(os: Option<&OperatingSystem>) -> (f32, f32) {
    match os {
        Some(OperatingSystem::Android) => (1.0, 0.0),
        Some(OperatingSystem::Ios) => (0.0, 1.0),
        _ => (0.0, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_phone() -> Phone {
        Phone {
            model: "A1".to_string(),
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
    fn test_android_one_hot() {
        let mut phone = base_phone();
        phone.os = Some(OperatingSystem::Android);

        let v = build_feature_vector(&phone);
        assert_eq!(&v[5..], &[1.0, 0.0]);
    }

    #[test]
    fn test_ios_one_hot() {
        let mut phone = base_phone();
        phone.os = Some(OperatingSystem::Ios);

        let v = build_feature_vector(&phone);
        assert_eq!(&v[5..], &[0.0, 1.0]);
    }

    #[test]
    fn test_unrecognized_or_missing_os_encodes_as_zeros() {
        let mut phone = base_phone();
        phone.os = Some(OperatingSystem::Other("HarmonyOS".to_string()));
        assert_eq!(&build_feature_vector(&phone)[5..], &[0.0, 0.0]);

        phone.os = None;
        assert_eq!(&build_feature_vector(&phone)[5..], &[0.0, 0.0]);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let v = build_feature_vector(&base_phone());
        assert_eq!(v[2], DEFAULT_STORAGE_GB);
        assert_eq!(v[3], DEFAULT_RAM_GB);
        assert_eq!(v[4], DEFAULT_CAMERA_MP);
    }

    #[test]
    fn test_present_fields_are_taken_directly() {
        let mut phone = base_phone();
        phone.storage = Some(256.0);
        phone.ram = Some(12.0);
        phone.camera = Some(108.0);
        phone.os = Some(OperatingSystem::Android);

        let v = build_feature_vector(&phone);
        assert_eq!(v, [500.0, 6.0, 256.0, 12.0, 108.0, 1.0, 0.0]);
    }
}
