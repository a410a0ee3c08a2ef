//! Identity lookup for the credential verifier.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use time::OffsetDateTime;

use crate::adapters::admins_sea;
use crate::entities::admins;
use crate::errors::StoreError;

/// A stored principal allowed to log in.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub create_time: OffsetDateTime,
    pub update_time: Option<OffsetDateTime>,
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("create_time", &self.create_time)
            .field("update_time", &self.update_time)
            .finish()
    }
}

impl From<admins::Model> for Identity {
    fn from(model: admins::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            password: model.password,
            create_time: model.create_time,
            update_time: model.update_time,
        }
    }
}

/// Read-only lookup of identities by email.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// `Ok(None)` when no identity has this email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError>;
}

/// Postgres-backed store over the `admins` table.
#[derive(Debug, Clone)]
pub struct SeaOrmCredentialStore {
    conn: DatabaseConnection,
}

impl SeaOrmCredentialStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl CredentialStore for SeaOrmCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError> {
        let admin = admins_sea::find_by_email(&self.conn, email).await?;
        Ok(admin.map(Identity::from))
    }
}

/// Process-local store, used by tests and local runs without a database.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    by_email: RwLock<HashMap<String, Identity>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identities(identities: impl IntoIterator<Item = Identity>) -> Self {
        let store = Self::new();
        for identity in identities {
            store.insert(identity);
        }
        store
    }

    pub fn insert(&self, identity: Identity) {
        self.by_email
            .write()
            .insert(identity.email.clone(), identity);
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError> {
        Ok(self.by_email.read().get(email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use time::macros::datetime;

    use super::*;

    fn admin_model() -> admins::Model {
        admins::Model {
            id: 7,
            email: "admin@xsports.id".to_string(),
            password: "s1".to_string(),
            create_time: datetime!(2024-01-01 00:00 UTC),
            update_time: None,
        }
    }

    #[tokio::test]
    async fn sea_orm_store_maps_row_to_identity() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![admin_model()]])
            .into_connection();
        let store = SeaOrmCredentialStore::new(conn);

        let identity = store.find_by_email("admin@xsports.id").await.unwrap().unwrap();
        assert_eq!(identity.id, 7);
        assert_eq!(identity.password, "s1");
    }

    #[tokio::test]
    async fn sea_orm_store_reports_miss_as_none() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<admins::Model>::new()])
            .into_connection();
        let store = SeaOrmCredentialStore::new(conn);

        assert_eq!(store.find_by_email("nobody@xsports.id").await.unwrap(), None);
    }

    #[tokio::test]
    async fn sea_orm_store_surfaces_db_errors() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let store = SeaOrmCredentialStore::new(conn);

        assert!(matches!(
            store.find_by_email("admin@xsports.id").await,
            Err(StoreError::Query(_))
        ));
    }

    #[tokio::test]
    async fn in_memory_store_looks_up_exact_email() {
        let store = InMemoryCredentialStore::with_identities([Identity::from(admin_model())]);

        assert!(store.find_by_email("admin@xsports.id").await.unwrap().is_some());
        assert!(store.find_by_email("ADMIN@xsports.id").await.unwrap().is_none());
    }

    #[test]
    fn debug_hides_password() {
        let rendered = format!("{:?}", Identity::from(admin_model()));
        assert!(!rendered.contains("s1\""));
        assert!(rendered.contains("[REDACTED]"));
    }
}
