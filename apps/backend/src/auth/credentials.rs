//! Password check against the credential store.

use std::sync::Arc;

use crate::errors::{AuthError, ServiceError};
use crate::guard::WorkContext;
use crate::logging::security;
use crate::repos::admins::{CredentialStore, Identity};

#[derive(Clone)]
pub struct CredentialVerifier {
    store: Arc<dyn CredentialStore>,
}

impl CredentialVerifier {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Resolve `email` to an identity whose stored secret equals `secret`.
    ///
    /// Empty inputs are rejected before the store is queried. A missing row and
    /// a failing store both come back as `InvalidEmail`; the latter is logged.
    pub async fn verify(
        &self,
        ctx: &WorkContext,
        email: &str,
        secret: &str,
    ) -> Result<Identity, ServiceError> {
        if email.is_empty() {
            return Err(AuthError::InvalidEmail.into());
        }
        if secret.is_empty() {
            return Err(AuthError::InvalidPassword.into());
        }

        let identity = match ctx.run(self.store.find_by_email(email)).await? {
            Ok(Some(identity)) => identity,
            Ok(None) => return Err(AuthError::InvalidEmail.into()),
            Err(e) => {
                security::credential_store_failed(email, &e.to_string());
                return Err(AuthError::InvalidEmail.into());
            }
        };

        if identity.password != secret {
            return Err(AuthError::InvalidPassword.into());
        }

        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use time::macros::datetime;

    use super::*;
    use crate::errors::{GuardError, StoreError};
    use crate::repos::admins::InMemoryCredentialStore;

    /// Counts lookups and optionally fails them.
    struct ProbeStore {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl CredentialStore for ProbeStore {
        async fn find_by_email(&self, _email: &str) -> Result<Option<Identity>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(StoreError::Unavailable("connection refused".into()))
            } else {
                Ok(None)
            }
        }
    }

    struct HangingStore;

    #[async_trait]
    impl CredentialStore for HangingStore {
        async fn find_by_email(&self, _email: &str) -> Result<Option<Identity>, StoreError> {
            std::future::pending().await
        }
    }

    fn verifier() -> CredentialVerifier {
        let store = InMemoryCredentialStore::with_identities([Identity {
            id: 1,
            email: "admin@xsports.id".into(),
            password: "s1".into(),
            create_time: datetime!(2024-01-01 00:00 UTC),
            update_time: None,
        }]);
        CredentialVerifier::new(Arc::new(store))
    }

    fn ctx() -> WorkContext {
        WorkContext::with_budget(Duration::from_secs(1))
    }

    #[tokio::test]
    async fn empty_inputs_never_reach_the_store() {
        let store = Arc::new(ProbeStore {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let verifier = CredentialVerifier::new(store.clone());

        let err = verifier.verify(&ctx(), "", "x").await.unwrap_err();
        assert_eq!(err, ServiceError::from(AuthError::InvalidEmail));
        let err = verifier.verify(&ctx(), "a@b.com", "").await.unwrap_err();
        assert_eq!(err, ServiceError::from(AuthError::InvalidPassword));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn matching_secret_returns_identity() {
        let identity = verifier().verify(&ctx(), "admin@xsports.id", "s1").await.unwrap();
        assert_eq!(identity.id, 1);
    }

    #[tokio::test]
    async fn wrong_secret_is_invalid_password() {
        let err = verifier()
            .verify(&ctx(), "admin@xsports.id", "s2")
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::from(AuthError::InvalidPassword));
    }

    #[tokio::test]
    async fn unknown_email_is_invalid_email() {
        let err = verifier()
            .verify(&ctx(), "ghost@xsports.id", "s1")
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::from(AuthError::InvalidEmail));
    }

    #[tokio::test]
    async fn store_failure_folds_into_invalid_email() {
        let verifier = CredentialVerifier::new(Arc::new(ProbeStore {
            calls: AtomicUsize::new(0),
            fail: true,
        }));
        let err = verifier
            .verify(&ctx(), "admin@xsports.id", "s1")
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::from(AuthError::InvalidEmail));
    }

    #[tokio::test]
    async fn hanging_lookup_stops_at_deadline() {
        let verifier = CredentialVerifier::new(Arc::new(HangingStore));
        let ctx = WorkContext::with_budget(Duration::from_millis(30));
        let err = verifier
            .verify(&ctx, "admin@xsports.id", "s1")
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::from(GuardError::Cancelled));
    }
}
