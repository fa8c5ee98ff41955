//! Shared helpers for integration tests: an in-memory SQLite directory,
//! scripted identity verifiers, user seeding, and token minting.

// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::SystemTime;

use actix_web::body::{to_bytes, MessageBody};
use actix_web::dev::{Service, ServiceResponse};
use async_trait::async_trait;
use backend::entities::users;
use backend::{
    AppError, AppState, IdentityVerifier, LocalTestIdentity, SecurityConfig, VerifiedIdentity,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use time::OffsetDateTime;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

/// Verifier double: succeeds with a fixed identity, or always fails.
pub struct ScriptedVerifier {
    identity: Option<VerifiedIdentity>,
}

#[async_trait]
impl IdentityVerifier for ScriptedVerifier {
    async fn verify(&self, _id_token: &str) -> Result<VerifiedIdentity, AppError> {
        self.identity
            .clone()
            .ok_or(AppError::UnauthorizedUpstream)
    }
}

pub fn verifier_ok(sub: &str, email: &str) -> Arc<ScriptedVerifier> {
    Arc::new(ScriptedVerifier {
        identity: Some(VerifiedIdentity {
            sub: sub.to_string(),
            email: email.to_string(),
        }),
    })
}

pub fn verifier_failing() -> Arc<ScriptedVerifier> {
    Arc::new(ScriptedVerifier { identity: None })
}

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET.as_bytes())
}

/// Fresh in-memory SQLite database with the schema applied.
///
/// A single connection: every pooled connection to `sqlite::memory:` would
/// otherwise see its own empty database.
async fn sqlite_conn() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1);

    let conn = Database::connect(options)
        .await
        .expect("sqlite connection");
    Migrator::up(&conn, None).await.expect("apply migrations");
    conn
}

pub async fn state_with_db(
    verifier: Arc<dyn IdentityVerifier>,
    local_test: Option<LocalTestIdentity>,
) -> AppState {
    AppState::new(sqlite_conn().await, test_security(), verifier, local_test)
}

pub fn state_without_db(
    verifier: Arc<dyn IdentityVerifier>,
    local_test: Option<LocalTestIdentity>,
) -> AppState {
    AppState::without_db(test_security(), verifier, local_test)
}

pub async fn seed_user(
    state: &AppState,
    google_sub: &str,
    email: &str,
    name: &str,
    is_admin: bool,
) -> users::Model {
    let now = OffsetDateTime::now_utc();
    users::ActiveModel {
        google_sub: Set(google_sub.to_string()),
        email: Set(email.to_string()),
        name: Set(name.to_string()),
        is_admin: Set(is_admin),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(state.db.as_ref().expect("seeding requires a database"))
    .await
    .expect("seed user")
}

pub fn mint_for(user: &users::Model, state: &AppState) -> String {
    let (token, _exp) = backend::mint_session_token(
        user.id,
        &user.google_sub,
        &user.email,
        user.is_admin,
        SystemTime::now(),
        &state.security,
    )
    .expect("mint token");
    token
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

/// Drive a request through the service and normalize the outcome to
/// (status, JSON body). Middleware failures surface as service-level errors
/// rather than responses, so both paths are handled here.
pub async fn send<S, B>(app: &S, req: actix_http::Request) -> (u16, serde_json::Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    match app.call(req).await {
        Ok(resp) => {
            let status = resp.status().as_u16();
            let bytes = to_bytes(resp.into_body()).await.unwrap_or_default();
            (status, serde_json::from_slice(&bytes).unwrap_or_default())
        }
        Err(err) => {
            let resp = err.error_response();
            let status = resp.status().as_u16();
            let bytes = to_bytes(resp.into_body()).await.unwrap_or_default();
            (status, serde_json::from_slice(&bytes).unwrap_or_default())
        }
    }
}
