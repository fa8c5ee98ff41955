#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;

// Re-exports for public API
pub use auth::claims::Claims;
pub use auth::jwt::{mint_session_token, verify_session_token, SESSION_TTL_SECS};
pub use auth::verifier::{GoogleVerifier, IdentityVerifier, VerifiedIdentity};
pub use config::db::{db_url, DbProfile};
pub use config::{local_test_identity, LocalTestIdentity, RuntimeEnv};
pub use error::AppError;
pub use extractors::{AdminUser, CurrentUser};
pub use infra::db::connect_db;
pub use middleware::cors::cors_middleware;
pub use middleware::request_log::RequestLog;
pub use middleware::require_auth::RequireAuth;
pub use services::login::LOCAL_TEST_TOKEN;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;
