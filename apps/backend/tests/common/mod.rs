#![allow(dead_code)]

use serde_json::Value;

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// `value[key].id`, panicking with the whole payload when absent.
pub fn id_of(value: &Value, key: &str) -> i64 {
    value[key]["id"]
        .as_i64()
        .unwrap_or_else(|| panic!("missing {key}.id in {value}"))
}

/// Strings of a JSON array, in order.
pub fn names(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap_or_else(|| panic!("expected array, got {value}"))
        .iter()
        .map(|v| v.as_str().unwrap_or_default().to_string())
        .collect()
}
