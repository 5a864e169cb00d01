//! Testing utilities for EdgeX client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use edgex_client::testing::load_fixture;
//!
//! let fixture = load_fixture("devices/list_devices.json");
//! ```

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "devices/list_devices.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Fixture whose item array holds only the first `count` entries.
pub fn load_fixture_truncated(fixture_path: &str, key: &str, count: usize) -> serde_json::Value {
    let mut fixture = load_fixture(fixture_path);
    if let Some(items) = fixture.get_mut(key).and_then(|v| v.as_array_mut()) {
        items.truncate(count);
    }
    fixture
}
