//! Login orchestration: external token verification, directory lookup,
//! privilege check, session token issuance.

use std::time::SystemTime;

use serde::Serialize;

use crate::auth::jwt::mint_session_token;
use crate::auth::verifier::VerifiedIdentity;
use crate::db::require_db;
use crate::error::AppError;
use crate::repos::users;
use crate::state::app_state::AppState;

/// Sentinel token that substitutes the configured local-test identity
/// instead of calling the external verifier. Only honored when the state
/// carries a local-test identity, which configuration refuses to populate
/// in production.
pub const LOCAL_TEST_TOKEN: &str = "LOCAL_TEST";

/// Caller-safe projection of the logged-in user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub user: UserSummary,
    /// Absolute expiry of the issued token, epoch milliseconds.
    pub expires_at: i64,
}

/// Exchange a Google ID token for a locally-issued session token.
///
/// Fails with 401 before any directory access when external verification
/// fails. Only administrators receive a session token; a matching
/// non-admin row is rejected with 403.
pub async fn login(state: &AppState, raw_token: &str) -> Result<LoginOutcome, AppError> {
    let identity = match (&state.local_test, raw_token) {
        (Some(local), LOCAL_TEST_TOKEN) => {
            tracing::warn!("login via LOCAL_TEST sentinel token");
            VerifiedIdentity {
                sub: local.google_sub.clone(),
                email: local.email.clone(),
            }
        }
        _ => state.verifier.verify(raw_token).await?,
    };

    let db = require_db(state)?;

    let user = users::find_by_subject_or_email(db, &identity.sub, &identity.email)
        .await?
        .ok_or_else(|| AppError::not_found("User not found."))?;

    if !user.is_admin {
        tracing::warn!(email = %user.email, "non-admin login attempt rejected");
        return Err(AppError::ForbiddenNotAdmin);
    }

    let (token, exp) = mint_session_token(
        user.id,
        &user.google_sub,
        &user.email,
        true,
        SystemTime::now(),
        &state.security,
    )?;

    Ok(LoginOutcome {
        token,
        user: UserSummary {
            id: user.id,
            name: user.name,
            email: user.email,
            is_admin: true,
        },
        expires_at: exp * 1000,
    })
}
