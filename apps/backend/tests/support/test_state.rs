use std::sync::Arc;
use std::time::Duration;

use backend::config::security::SecurityConfig;
use backend::infra::state::{build_state, StateBuilder};
use backend::repos::admins::{Identity, InMemoryCredentialStore};
use backend::state::app_state::AppState;
use time::macros::datetime;

pub const ADMIN_ID: i64 = 1;
pub const ADMIN_EMAIL: &str = "admin@xsports.id";
pub const ADMIN_PASSWORD: &str = "s1";

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";
pub const TEST_TTL: Duration = Duration::from_secs(3600);

pub fn admin_identity() -> Identity {
    Identity {
        id: ADMIN_ID,
        email: ADMIN_EMAIL.to_string(),
        password: ADMIN_PASSWORD.to_string(),
        create_time: datetime!(2024-01-01 00:00 UTC),
        update_time: None,
    }
}

pub fn security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET, TEST_TTL)
}

/// Builder preloaded with test security and one admin identity.
pub fn seeded_builder() -> StateBuilder {
    build_state()
        .with_security(security())
        .with_credential_store(Arc::new(InMemoryCredentialStore::with_identities([
            admin_identity(),
        ])))
}

pub fn seeded_state() -> AppState {
    seeded_builder()
        .build()
        .unwrap_or_else(|e| panic!("test state should build: {e}"))
}
