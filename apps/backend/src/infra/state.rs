use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::auth::service::{AuthService, Clock};
use crate::config::security::SecurityConfig;
use crate::config::server::DEFAULT_REQUEST_BUDGET;
use crate::error::AppError;
use crate::errors::ErrorClassifier;
use crate::guard::RequestGuard;
use crate::repos::admins::{CredentialStore, InMemoryCredentialStore, SeaOrmCredentialStore};
use crate::repos::games::{GameStore, InMemoryGameStore, SeaOrmGameStore};
use crate::services::games::GameService;
use crate::state::app_state::AppState;

/// Assembles [`AppState`] for both the binary and tests.
///
/// With a database the SeaORM stores are used unless a store was set
/// explicitly; without one, empty in-memory stores are the fallback.
pub struct StateBuilder {
    security: Option<SecurityConfig>,
    db: Option<DatabaseConnection>,
    credentials: Option<Arc<dyn CredentialStore>>,
    games: Option<Arc<dyn GameStore>>,
    budget: Duration,
    classifier: Option<ErrorClassifier>,
    clock: Option<Clock>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security: None,
            db: None,
            credentials: None,
            games: None,
            budget: DEFAULT_REQUEST_BUDGET,
            classifier: None,
            clock: None,
        }
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = Some(security);
        self
    }

    pub fn with_db(mut self, conn: DatabaseConnection) -> Self {
        self.db = Some(conn);
        self
    }

    pub fn with_credential_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(store);
        self
    }

    pub fn with_game_store(mut self, store: Arc<dyn GameStore>) -> Self {
        self.games = Some(store);
        self
    }

    pub fn with_request_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_classifier(mut self, classifier: ErrorClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let security = self
            .security
            .ok_or_else(|| AppError::config("security configuration is required"))?;

        let credentials = match (self.credentials, &self.db) {
            (Some(store), _) => store,
            (None, Some(conn)) => Arc::new(SeaOrmCredentialStore::new(conn.clone())),
            (None, None) => Arc::new(InMemoryCredentialStore::new()),
        };
        let game_store = match (self.games, &self.db) {
            (Some(store), _) => store,
            (None, Some(conn)) => Arc::new(SeaOrmGameStore::new(conn.clone())),
            (None, None) => Arc::new(InMemoryGameStore::new()),
        };

        let mut auth = AuthService::new(&security, credentials)
            .map_err(|e| AppError::config(e.to_string()))?;
        let mut games = GameService::new(game_store);
        if let Some(clock) = self.clock {
            auth = auth.with_clock(clock);
            games = games.with_clock(clock);
        }

        Ok(AppState {
            auth: Arc::new(auth),
            games: Arc::new(games),
            classifier: Arc::new(self.classifier.unwrap_or_else(ErrorClassifier::standard)),
            guard: RequestGuard::new(self.budget),
            db: self.db,
        })
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_without_db_uses_in_memory_stores() {
        let state = build_state()
            .with_security(SecurityConfig::new("state_builder_secret", Duration::from_secs(60)))
            .build()
            .unwrap();
        assert!(state.db().is_none());
        assert_eq!(state.guard.budget(), DEFAULT_REQUEST_BUDGET);
    }

    #[test]
    fn build_requires_security() {
        let err = build_state().build().err().unwrap();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[test]
    fn empty_secret_fails_at_build_time() {
        let err = build_state()
            .with_security(SecurityConfig::new("", Duration::from_secs(60)))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[test]
    fn unbounded_ttl_fails_at_build_time() {
        let err = build_state()
            .with_security(SecurityConfig::new("k", Duration::from_secs(u64::MAX)))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, AppError::Config { .. }));
    }
}
