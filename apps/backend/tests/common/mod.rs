#![allow(dead_code)]

use serde_json::Value;

#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub const REQUEST_ID: &str = "x-request-id";

/// Proptest config; `PROPTEST_CASES` overrides the default case count.
pub fn proptest_config() -> proptest::prelude::ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(64)
        .max(1);

    proptest::prelude::ProptestConfig {
        failure_persistence: None,
        cases,
        ..proptest::prelude::ProptestConfig::default()
    }
}

/// Unwrap the `{"data": ...}` success envelope.
pub fn data(body: &Value) -> &Value {
    body.get("data").expect("success body should carry `data`")
}
