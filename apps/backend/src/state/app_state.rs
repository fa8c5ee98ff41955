use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::auth::verifier::IdentityVerifier;
use crate::config::LocalTestIdentity;

use super::security_config::SecurityConfig;

/// Application state shared across request handlers.
///
/// All shared resources are owned here and injected via `web::Data`; nothing
/// in the request path reaches for ambient globals.
#[derive(Clone)]
pub struct AppState {
    /// Pooled database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Session token signing configuration
    pub security: SecurityConfig,
    /// External identity verifier (Google in production, doubles in tests)
    pub verifier: Arc<dyn IdentityVerifier>,
    /// Identity substituted for the LOCAL_TEST sentinel token.
    /// Never populated in the production runtime environment.
    pub local_test: Option<LocalTestIdentity>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        security: SecurityConfig,
        verifier: Arc<dyn IdentityVerifier>,
        local_test: Option<LocalTestIdentity>,
    ) -> Self {
        Self {
            db: Some(db),
            security,
            verifier,
            local_test,
        }
    }

    /// Build a state without a database connection (for tests that must not
    /// touch the directory).
    pub fn without_db(
        security: SecurityConfig,
        verifier: Arc<dyn IdentityVerifier>,
        local_test: Option<LocalTestIdentity>,
    ) -> Self {
        Self {
            db: None,
            security,
            verifier,
            local_test,
        }
    }
}
