//! Credential stores with scripted misbehaviour.

use std::time::Duration;

use async_trait::async_trait;
use backend::errors::StoreError;
use backend::repos::admins::{CredentialStore, Identity};

/// Answers every lookup after `delay`.
pub struct SlowStore {
    pub delay: Duration,
    pub identity: Identity,
}

#[async_trait]
impl CredentialStore for SlowStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<Identity>, StoreError> {
        tokio::time::sleep(self.delay).await;
        Ok(Some(self.identity.clone()))
    }
}

/// Always fails as if the database were down.
pub struct DownStore;

#[async_trait]
impl CredentialStore for DownStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<Identity>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

/// Panics inside the worker.
pub struct PanickingStore;

#[async_trait]
impl CredentialStore for PanickingStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<Identity>, StoreError> {
        panic!("credential store exploded");
    }
}
