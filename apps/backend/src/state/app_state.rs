use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::auth::service::AuthService;
use crate::errors::ErrorClassifier;
use crate::guard::RequestGuard;
use crate::services::games::GameService;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub games: Arc<GameService>,
    pub classifier: Arc<ErrorClassifier>,
    pub guard: RequestGuard,
    /// `None` when running on in-memory stores.
    pub db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
